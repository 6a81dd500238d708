use catalog::QueryResult;
use dioxus::prelude::*;

/// How many page numbers are shown around the current page
const WINDOW: usize = 5;

/// What the pagination bar shows for one result page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControls {
    pub current: usize,
    pub pages: Vec<usize>,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PageControls {
    /// `None` when everything fits on one page.
    pub fn for_result(result: &QueryResult) -> Option<Self> {
        let total = result.total_pages();
        if total <= 1 {
            return None;
        }
        Some(Self {
            current: result.page,
            pages: catalog::page_window(result.page, total, WINDOW),
            has_previous: result.has_previous(),
            has_next: result.has_next(),
        })
    }
}

#[component]
pub fn Pagination(result: QueryResult, on_select: EventHandler<usize>) -> Element {
    let Some(PageControls {
        current,
        pages,
        has_previous,
        has_next,
    }) = PageControls::for_result(&result)
    else {
        return rsx! {};
    };

    let nav_class = "px-3 py-2 rounded-lg text-sm font-medium border border-white/10 transition-colors";
    let enabled_class = "text-gray-300 hover:bg-white/5 hover:text-white cursor-pointer";
    let disabled_class = "text-gray-600 cursor-not-allowed";

    rsx! {
      nav { class: "flex items-center justify-center gap-2 mt-10", "aria-label": "Pagination",
        button {
          class: "{nav_class}",
          class: if has_previous { "{enabled_class}" } else { "{disabled_class}" },
          disabled: !has_previous,
          onclick: move |_| on_select.call(current - 1),
          "Previous"
        }
        for page in pages {
          button {
            key: "{page}",
            class: "w-10 h-10 rounded-lg text-sm font-semibold transition-colors cursor-pointer",
            class: if page == current { "bg-venue-accent text-white" } else { "text-gray-400 hover:bg-white/5 hover:text-white" },
            "aria-current": if page == current { "page" } else { "false" },
            onclick: move |_| on_select.call(page),
            "{page}"
          }
        }
        button {
          class: "{nav_class}",
          class: if has_next { "{enabled_class}" } else { "{disabled_class}" },
          disabled: !has_next,
          onclick: move |_| on_select.call(current + 1),
          "Next"
        }
      }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(page: usize, total_matched: usize) -> QueryResult {
        QueryResult {
            items: Vec::new(),
            total_matched,
            page,
            page_size: 9,
        }
    }

    #[test]
    fn test_single_page_has_no_controls() {
        assert_eq!(PageControls::for_result(&result(1, 9)), None);
        assert_eq!(PageControls::for_result(&result(1, 0)), None);
    }

    #[test]
    fn test_controls_follow_result_page() {
        let first = PageControls::for_result(&result(1, 20)).unwrap();
        assert_eq!(first.pages, vec![1, 2, 3]);
        assert!(!first.has_previous);
        assert!(first.has_next);

        let last = PageControls::for_result(&result(3, 20)).unwrap();
        assert_eq!(last.current, 3);
        assert!(last.has_previous);
        assert!(!last.has_next);
    }

    #[test]
    fn test_page_past_the_end_only_goes_back() {
        let controls = PageControls::for_result(&result(7, 20)).unwrap();
        assert!(controls.has_previous);
        assert!(!controls.has_next);
    }
}
