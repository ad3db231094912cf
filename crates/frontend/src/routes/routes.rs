use crate::domain::assignment::ui::order_assignment::OrderAssignmentPage;
use crate::domain::assignment::ui::report_list::TechnicianReportList;
use crate::domain::order::ui::details::OrderDetails;
use crate::domain::order::ui::list::OrderList;
use crate::layout::Shell;
use crate::shared::components::notice::PageError;
use crate::system::pages::landing::LandingPage;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path, StaticSegment,
};

type TwoSegments = (StaticSegment<&'static str>, StaticSegment<&'static str>);

/// Объявляет путь страницы из двух сегментов: строковую константу для
/// ссылок и сегменты для `<Route>` из одних и тех же литералов.
macro_rules! app_route {
    ($(#[$meta:meta])* $name:ident, $segments:ident, $first:literal, $second:literal) => {
        $(#[$meta])*
        pub const $name: &str = concat!("/", $first, "/", $second);

        fn $segments() -> TwoSegments {
            (StaticSegment($first), StaticSegment($second))
        }
    };
}

app_route!(
    /// Заявки техника
    ROUTE_TECHNICIAN_ORDERS, technician_orders_path, "tecnico", "ordenes_table"
);
app_route!(ROUTE_TECHNICIAN_ORDER_DETAILS, technician_order_details_path, "tecnico", "orden_details");
app_route!(
    /// Отчёт по техникам для супервизора
    ROUTE_SUPERVISOR_REPORT, supervisor_report_path, "supervisor", "tecnicos_table"
);
app_route!(ROUTE_SUPERVISOR_ORDER_DETAILS, supervisor_order_details_path, "supervisor", "orden_details");

/// Ссылка на страницу заявки с параметром `ordenId`
pub fn order_link(base: &str, order_id: &str) -> String {
    format!("{base}?ordenId={}", urlencoding::encode(order_id))
}

#[component]
fn NotFound() -> impl IntoView {
    view! { <PageError title="404" message="Página no encontrada." /> }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=LandingPage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=technician_orders_path() view=OrderList />
                    <Route path=technician_order_details_path() view=OrderDetails />
                    <Route path=supervisor_report_path() view=TechnicianReportList />
                    <Route path=supervisor_order_details_path() view=OrderAssignmentPage />
                </Routes>
            </Shell>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_link() {
        assert_eq!(
            order_link(ROUTE_TECHNICIAN_ORDER_DETAILS, "42"),
            "/tecnico/orden_details?ordenId=42"
        );
        assert_eq!(
            order_link(ROUTE_SUPERVISOR_ORDER_DETAILS, "7 8"),
            "/supervisor/orden_details?ordenId=7%208"
        );
    }

    #[test]
    fn test_route_segments_match_link_constants() {
        let joined = |(a, b): TwoSegments| format!("/{}/{}", a.0, b.0);
        assert_eq!(joined(technician_orders_path()), ROUTE_TECHNICIAN_ORDERS);
        assert_eq!(joined(technician_order_details_path()), ROUTE_TECHNICIAN_ORDER_DETAILS);
        assert_eq!(joined(supervisor_report_path()), ROUTE_SUPERVISOR_REPORT);
        assert_eq!(joined(supervisor_order_details_path()), ROUTE_SUPERVISOR_ORDER_DETAILS);
        assert_eq!(ROUTE_TECHNICIAN_ORDERS, "/tecnico/ordenes_table");
    }
}
