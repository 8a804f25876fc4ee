use leptos::*;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableLabels {
    pub search: String,
    pub length_menu: String,
    pub info: String,
    pub info_empty: String,
    pub info_filtered: String,
    pub first: String,
    pub last: String,
    pub next: String,
    pub previous: String,
}

impl Default for TableLabels {
    fn default() -> Self {
        Self {
            search: "Search:".into(),
            length_menu: "Show _MENU_ entries per page".into(),
            info: "Showing _START_ to _END_ of _TOTAL_ entries".into(),
            info_empty: "Showing 0 to 0 of 0 entries".into(),
            info_filtered: "(filtered from _MAX_ total entries)".into(),
            first: "First".into(),
            last: "Last".into(),
            next: "Next".into(),
            previous: "Previous".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    pub page_length: usize,
    pub length_menu: Vec<usize>,
    pub order: (usize, SortDirection),
    pub labels: TableLabels,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            page_length: 10,
            length_menu: vec![10, 25, 50, 100],
            order: (0, SortDirection::Desc),
            labels: TableLabels::default(),
        }
    }
}

impl TableOptions {
    pub fn with_page_length(mut self, page_length: usize) -> Self {
        self.page_length = page_length.max(1);
        self
    }

    pub fn with_order(mut self, column: usize, direction: SortDirection) -> Self {
        self.order = (column, direction);
        self
    }
}

fn compare_cells(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<f64>(), b.trim().parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}

/// Search, ordering and paging over an in-memory set of rows.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    rows: Vec<Vec<String>>,
    options: TableOptions,
    search: String,
    page: usize,
}

impl TableView {
    pub fn new(rows: Vec<Vec<String>>, mut options: TableOptions) -> Self {
        options.page_length = options.page_length.max(1);
        Self {
            rows,
            options,
            search: String::new(),
            page: 0,
        }
    }

    /// Swaps in new rows, keeping the search, ordering and (clamped) page.
    pub fn set_rows(&mut self, rows: Vec<Vec<String>>) {
        self.rows = rows;
        self.page = self.page.min(self.page_count() - 1);
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 0;
    }

    pub fn set_page_length(&mut self, page_length: usize) {
        self.options.page_length = page_length.max(1);
        self.page = 0;
    }

    pub fn sort_by(&mut self, column: usize) {
        let direction = match self.options.order {
            (current, SortDirection::Asc) if current == column => SortDirection::Desc,
            (current, SortDirection::Desc) if current == column => SortDirection::Asc,
            _ => SortDirection::Asc,
        };
        self.options.order = (column, direction);
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        let total = self.filtered().len();
        total.div_ceil(self.options.page_length).max(1)
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.min(self.page_count() - 1);
    }

    fn filtered(&self) -> Vec<&Vec<String>> {
        let needle = self.search.trim().to_lowercase();
        let mut rows: Vec<&Vec<String>> = self
            .rows
            .iter()
            .filter(|row| {
                needle.is_empty() || row.iter().any(|cell| cell.to_lowercase().contains(&needle))
            })
            .collect();
        let (column, direction) = self.options.order;
        rows.sort_by(|a, b| {
            let left = a.get(column).map(String::as_str).unwrap_or("");
            let right = b.get(column).map(String::as_str).unwrap_or("");
            let ord = compare_cells(left, right);
            match direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
        rows
    }

    pub fn visible_rows(&self) -> Vec<Vec<String>> {
        let len = self.options.page_length;
        self.filtered()
            .into_iter()
            .skip(self.page * len)
            .take(len)
            .cloned()
            .collect()
    }

    pub fn info(&self) -> String {
        let labels = &self.options.labels;
        let total = self.filtered().len();
        let mut text = if total == 0 {
            labels.info_empty.clone()
        } else {
            let start = self.page * self.options.page_length + 1;
            let end = (start + self.options.page_length - 1).min(total);
            labels
                .info
                .replace("_START_", &start.to_string())
                .replace("_END_", &end.to_string())
                .replace("_TOTAL_", &total.to_string())
        };
        if total != self.rows.len() {
            text.push(' ');
            text.push_str(&labels.info_filtered.replace("_MAX_", &self.rows.len().to_string()));
        }
        text
    }
}

#[component]
pub fn DataTable(
    #[prop(into)] headers: Vec<String>,
    #[prop(into)] rows: MaybeSignal<Vec<Vec<String>>>,
    #[prop(optional)] options: Option<TableOptions>,
    #[prop(optional, into)] id: Option<String>,
) -> impl IntoView {
    let view_state = create_rw_signal(TableView::new(
        rows.get_untracked(),
        options.unwrap_or_default(),
    ));
    create_effect(move |_| {
        let latest = rows.get();
        view_state.update(|v| v.set_rows(latest));
    });
    let labels = view_state.with_untracked(|v| v.options().labels.clone());
    let length_menu = view_state.with_untracked(|v| v.options().length_menu.clone());
    let (menu_prefix, menu_suffix) = labels
        .length_menu
        .split_once("_MENU_")
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .unwrap_or_else(|| (labels.length_menu.clone(), String::new()));

    let header_cells = headers
        .into_iter()
        .enumerate()
        .map(|(index, title)| {
            view! {
                <th class="sortable" on:click=move |_| view_state.update(|v| v.sort_by(index))>
                    {title}
                </th>
            }
        })
        .collect_view();

    view! {
        <div class="data-table">
            <div class="d-flex justify-content-between mb-2">
                <label>
                    {menu_prefix}
                    <select on:change=move |ev| {
                        if let Ok(len) = event_target_value(&ev).parse::<usize>() {
                            view_state.update(|v| v.set_page_length(len));
                        }
                    }>
                        {length_menu
                            .into_iter()
                            .map(|len| {
                                let selected = move || view_state.with(|v| v.options().page_length == len);
                                view! { <option value=len.to_string() selected=selected>{len}</option> }
                            })
                            .collect_view()}
                    </select>
                    {menu_suffix}
                </label>
                <label>
                    {labels.search.clone()}
                    <input
                        type="search"
                        prop:value=move || view_state.with(|v| v.search().to_string())
                        on:input=move |ev| view_state.update(|v| v.set_search(event_target_value(&ev)))
                    />
                </label>
            </div>
            <table id=id class="table table-striped">
                <thead><tr>{header_cells}</tr></thead>
                <tbody>
                    {move || {
                        view_state
                            .with(|v| v.visible_rows())
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <tr>
                                        {row.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
            <div class="d-flex justify-content-between">
                <span class="table-info">{move || view_state.with(|v| v.info())}</span>
                <div class="btn-group">
                    <button class="btn btn-sm" on:click=move |_| view_state.update(|v| v.set_page(0))>
                        {labels.first.clone()}
                    </button>
                    <button
                        class="btn btn-sm"
                        on:click=move |_| view_state.update(|v| v.set_page(v.page().saturating_sub(1)))
                    >
                        {labels.previous.clone()}
                    </button>
                    <button
                        class="btn btn-sm"
                        on:click=move |_| view_state.update(|v| v.set_page(v.page() + 1))
                    >
                        {labels.next.clone()}
                    </button>
                    <button
                        class="btn btn-sm"
                        on:click=move |_| view_state.update(|v| v.set_page(usize::MAX))
                    >
                        {labels.last.clone()}
                    </button>
                </div>
            </div>
        </div>
    }
}
