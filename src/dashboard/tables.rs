//! Table views for dashboard data display.

use maud::{Markup, html};
use time::Month;

use crate::{
    html::{TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, format_currency, link},
    statistics::MonthlyStatistics,
    transaction::Transaction,
};

const STATISTIC_LABEL_STYLE: &str = "text-sm text-gray-600 dark:text-gray-400";
const STATISTIC_VALUE_STYLE: &str = "text-2xl font-bold";

/// Renders the sales totals for the selected month.
pub(super) fn statistics_box(month: Month, statistics: &MonthlyStatistics) -> Markup {
    html! {
        section id="statistics" class="w-full mb-8"
        {
            h2 class="text-xl font-semibold mb-4" { "Transaction Statistics - " (month) }

            div class="grid grid-cols-1 sm:grid-cols-3 gap-4"
            {
                div class="bg-white dark:bg-gray-800 rounded-lg shadow p-4"
                {
                    span class=(STATISTIC_LABEL_STYLE) { "Total sale amount" }
                    p id="total-sale-amount" class=(STATISTIC_VALUE_STYLE)
                    {
                        (format_currency(statistics.total_sale_amount))
                    }
                }

                div class="bg-white dark:bg-gray-800 rounded-lg shadow p-4"
                {
                    span class=(STATISTIC_LABEL_STYLE) { "Total sold items" }
                    p id="total-sold-items" class=(STATISTIC_VALUE_STYLE)
                    {
                        (statistics.total_sold_items)
                    }
                }

                div class="bg-white dark:bg-gray-800 rounded-lg shadow p-4"
                {
                    span class=(STATISTIC_LABEL_STYLE) { "Total unsold items" }
                    p id="total-unsold-items" class=(STATISTIC_VALUE_STYLE)
                    {
                        (statistics.total_unsold_items)
                    }
                }
            }
        }
    }
}

/// The links and labels shown under the transaction table.
pub(super) struct PageControls {
    pub page_number: usize,
    pub page_size: usize,
    pub previous_url: String,
    pub next_url: String,
}

/// Renders one page of transactions with previous/next links.
pub(super) fn transaction_table(rows: &[Transaction], controls: &PageControls) -> Markup {
    html! {
        section id="transactions" class="w-full"
        {
            h2 class="text-xl font-semibold mb-4" { "Transaction Table" }

            div class="overflow-x-auto rounded-lg shadow"
            {
                table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "ID" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Title" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Price" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Sold" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Image" }
                        }
                    }

                    tbody
                    {
                        @for transaction in rows {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                td class=(TABLE_CELL_STYLE) { (transaction.id) }
                                td class=(TABLE_CELL_STYLE) { (transaction.title) }
                                td class=(TABLE_CELL_STYLE) { (transaction.description) }
                                td class=(TABLE_CELL_STYLE) { (transaction.price) }
                                td class=(TABLE_CELL_STYLE) { (transaction.category) }
                                td class=(TABLE_CELL_STYLE) { @if transaction.sold { "Yes" } @else { "No" } }
                                td class=(TABLE_CELL_STYLE)
                                {
                                    img
                                        width="50"
                                        height="50"
                                        src=(transaction.image)
                                        alt=(transaction.title);
                                }
                            }
                        }

                        @if rows.is_empty() {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                td colspan="7" class={(TABLE_CELL_STYLE) " text-center"}
                                {
                                    "No transactions found."
                                }
                            }
                        }
                    }
                }
            }

            div id="pagination" class="flex justify-between items-center mt-4 text-gray-900 dark:text-white"
            {
                span { "Page No: " (controls.page_number) }
                div class="flex gap-4"
                {
                    (link(&controls.previous_url, "Previous"))
                    (link(&controls.next_url, "Next"))
                }
                span { "Per Page: " (controls.page_size) }
            }
        }
    }
}
