use crate::shared::icons::icon;
use leptos::prelude::*;

/// Previous/next and numbered page buttons under a list
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,
    #[prop(into)]
    total_pages: Signal<usize>,
    /// Number of items after filtering
    #[prop(into)]
    total_count: Signal<usize>,
    /// 1-based index range of the visible rows
    #[prop(into)]
    range: Signal<(usize, usize)>,
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let go = move |page: usize| {
        let total = total_pages.get_untracked();
        if page >= 1 && page <= total && page != current_page.get_untracked() {
            on_page_change.run(page);
        }
    };

    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <div class="pagination-controls">
                <span class="pagination-info">
                    {move || {
                        let (first, last) = range.get();
                        format!("Showing {}-{} of {}", first, last, total_count.get())
                    }}
                </span>
                <button
                    class="pagination-btn"
                    on:click=move |_| go(current_page.get_untracked().saturating_sub(1))
                    disabled=move || current_page.get() <= 1
                    title="Previous page"
                >
                    {icon("chevron-left")}
                </button>
                {move || {
                    let current = current_page.get();
                    page_window(current, total_pages.get())
                        .into_iter()
                        .map(|page| match page {
                            Some(page) => view! {
                                <button
                                    class="pagination-btn"
                                    class:pagination-btn--active=page == current
                                    on:click=move |_| go(page)
                                >
                                    {page.to_string()}
                                </button>
                            }
                            .into_any(),
                            None => view! { <span class="pagination-gap">"…"</span> }.into_any(),
                        })
                        .collect_view()
                }}
                <button
                    class="pagination-btn"
                    on:click=move |_| go(current_page.get_untracked() + 1)
                    disabled=move || current_page.get() >= total_pages.get()
                    title="Next page"
                >
                    {icon("chevron-right")}
                </button>
            </div>
        </Show>
    }
}

/// Page numbers to show: first, last, and the neighbours of the current page.
/// `None` marks a gap.
pub fn page_window(current: usize, total: usize) -> Vec<Option<usize>> {
    let mut pages = Vec::new();
    let mut last_shown = 0;
    for page in 1..=total {
        let near = page + 1 >= current && page <= current + 1;
        if page == 1 || page == total || near {
            if last_shown != 0 && page > last_shown + 1 {
                pages.push(None);
            }
            pages.push(Some(page));
            last_shown = page;
        }
    }
    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_window() {
        assert_eq!(page_window(1, 1), vec![Some(1)]);
        assert_eq!(page_window(2, 3), vec![Some(1), Some(2), Some(3)]);
        assert_eq!(
            page_window(5, 10),
            vec![Some(1), None, Some(4), Some(5), Some(6), None, Some(10)]
        );
        assert_eq!(page_window(1, 5), vec![Some(1), Some(2), None, Some(5)]);
        assert!(page_window(1, 0).is_empty());
    }
}
