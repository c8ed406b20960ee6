//! Dashboard HTTP handler and view rendering.

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::{Deserialize, Serialize};

use crate::{
    AppState,
    dashboard::{
        charts::{DashboardChart, chart_script, chart_view, price_histogram_chart},
        tables::{PageControls, statistics_box, transaction_table},
        view_model::{DEFAULT_MONTH, DashboardViewModel},
    },
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, HeadElement,
        PAGE_CONTAINER_STYLE, base,
    },
    pagination::PaginationConfig,
    query::{QueryService, TransactionQueries},
    statistics::{MONTHS, month_query_value, parse_month_name},
};

const ECHARTS_SCRIPT_URL: &str = "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js";

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The queries over the transaction dataset.
    pub queries: QueryService,
    /// The config that controls how many transactions are shown per page.
    pub pagination_config: PaginationConfig,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            queries: state.queries.clone(),
            pagination_config: state.pagination_config.clone(),
        }
    }
}

/// The dashboard query string, e.g. `/?search=shirt&month=july&page=2`.
///
/// The search form does not send `page`, so submitting a new search always
/// shows the first page of results.
#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct DashboardQuery {
    /// Text to search transaction titles, descriptions and prices for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// The full English name of the month to show statistics for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
    /// The 1-based page of the transaction table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
}

/// Display the transaction table, monthly statistics and price histogram.
pub async fn get_dashboard_page(
    State(state): State<DashboardState>,
    Query(query): Query<DashboardQuery>,
) -> Response {
    let view_model = build_view_model(&state.queries, &state.pagination_config, &query);

    dashboard_view(&view_model).into_response()
}

/// Apply the query string to a fresh view model.
fn build_view_model<'a, Q: TransactionQueries>(
    queries: &'a Q,
    pagination_config: &PaginationConfig,
    query: &DashboardQuery,
) -> DashboardViewModel<'a, Q> {
    let mut view_model = DashboardViewModel::new(queries, pagination_config.page_size);

    if let Some(search) = query.search.as_deref().filter(|search| !search.is_empty()) {
        view_model.set_search_term(search);
    }

    if let Some(month_name) = query.month.as_deref() {
        match parse_month_name(month_name) {
            Some(month) => view_model.set_selected_month(month),
            None => tracing::warn!(
                "Unknown month {month_name:?} requested for the dashboard, showing {DEFAULT_MONTH}"
            ),
        }
    }

    if let Some(page) = query.page {
        view_model.go_to_page(page);
    }

    view_model
}

/// The dashboard URL that shows `view_model`'s search, month and page.
fn dashboard_url<Q: TransactionQueries>(view_model: &DashboardViewModel<'_, Q>) -> String {
    let query = DashboardQuery {
        search: Some(view_model.search_term().to_owned()).filter(|search| !search.is_empty()),
        month: Some(month_query_value(view_model.selected_month())),
        page: Some(view_model.page_number()),
    };

    match serde_urlencoded::to_string(&query) {
        Ok(query_string) => format!("{}?{query_string}", endpoints::DASHBOARD_VIEW),
        Err(error) => {
            tracing::error!("could not encode dashboard query {query:?}: {error}");
            endpoints::DASHBOARD_VIEW.to_owned()
        }
    }
}

fn page_controls<Q: TransactionQueries>(view_model: &DashboardViewModel<'_, Q>) -> PageControls {
    let mut previous = view_model.clone();
    previous.previous_page();

    let mut next = view_model.clone();
    next.next_page();

    PageControls {
        page_number: view_model.page_number(),
        page_size: view_model.page_size(),
        previous_url: dashboard_url(&previous),
        next_url: dashboard_url(&next),
    }
}

fn search_form<Q: TransactionQueries>(view_model: &DashboardViewModel<'_, Q>) -> Markup {
    let selected_month = view_model.selected_month();

    html! {
        form
            id="search-form"
            method="get"
            action=(endpoints::DASHBOARD_VIEW)
            class="w-full flex flex-col sm:flex-row gap-4 items-end mb-8"
        {
            div class="flex-1 w-full"
            {
                label for="search" class=(FORM_LABEL_STYLE) { "Search transaction" }
                input
                    type="text"
                    name="search"
                    id="search"
                    placeholder="Search transaction"
                    value=(view_model.search_term())
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="month" class=(FORM_LABEL_STYLE) { "Month" }
                select name="month" id="month" class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for month in MONTHS {
                        option
                            value=(month_query_value(month))
                            selected[month == selected_month]
                        {
                            (month)
                        }
                    }
                }
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Apply" }
        }
    }
}

fn dashboard_view<Q: TransactionQueries>(view_model: &DashboardViewModel<'_, Q>) -> Markup {
    let chart = DashboardChart {
        id: "price-histogram-chart",
        options: price_histogram_chart(&view_model.price_histogram()).to_string(),
    };
    let statistics = view_model.statistics();

    let content = html!(
        div id="dashboard-content" class={(PAGE_CONTAINER_STYLE) " max-w-screen-xl"}
        {
            h1 class="text-2xl font-bold mb-6" { "Transaction Dashboard" }

            (search_form(view_model))

            (statistics_box(view_model.selected_month(), &statistics))

            section id="charts" class="w-full mb-8"
            {
                (chart_view(&chart))
            }

            (transaction_table(view_model.visible_rows(), &page_controls(view_model)))
        }
    );

    let scripts = [
        HeadElement::ScriptLink(ECHARTS_SCRIPT_URL.to_owned()),
        chart_script(&chart),
    ];

    base("Dashboard", &scripts, &content)
}
