/// HTTP tests driving the router in-process

#[cfg(test)]
mod dashboard_api_tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use chrono::NaiveDate;
    use livrocaixa_core::{Cashbook, DashboardService, DashboardSettings, Transaction};
    use livrocaixa_server::main_lib::{app, AppState};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use serde_json::Value;
    use tower::ServiceExt;

    fn sale(y: i32, m: u32, d: u32, value: Decimal, client: &str) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(y, m, d),
            value,
            value / dec!(20),
            Decimal::ONE,
            Some(client.to_string()),
        )
    }

    fn test_app() -> Router {
        let cashbook = Cashbook::new(
            vec![
                sale(2024, 2, 12, dec!(4000), "Ana"),
                sale(2024, 3, 4, dec!(10000), "Ana"),
                sale(2024, 3, 5, dec!(20000), "Bruno"),
                sale(2024, 3, 6, dec!(5000), "Carla"),
            ],
            true,
        );
        let service = DashboardService::new(Arc::new(cashbook), DashboardSettings::default());
        app(Arc::new(AppState {
            dashboard_service: Arc::new(service),
        }))
    }

    async fn get(uri: &str) -> (StatusCode, Vec<u8>) {
        let response = test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let (status, body) = get(uri).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_months_listing() {
        let (status, json) = get_json("/api/v1/months").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["months"], serde_json::json!(["2024-02", "2024-03"]));
        assert_eq!(json["default"], "2024-03");
    }

    #[tokio::test]
    async fn test_dashboard_for_month() {
        let (status, json) = get_json("/api/v1/dashboard?month=2024-03&today=2024-03-20").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["selectedMonth"], "2024-03");
        assert_eq!(json["kpis"][1]["value"], "R$ 35,000.00");
        assert_eq!(json["kpis"][2]["value"], "R$ 65,000.00");
        assert_eq!(json["progress"]["label"], "Progresso da Meta: 35.00%");
        assert_eq!(json["charts"]["clients"]["kind"], "horizontalBar");
        assert_eq!(json["charts"]["clients"]["points"][0]["category"], "Bruno");
        assert_eq!(json["charts"]["revenue"]["points"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_dashboard_defaults_to_latest_month() {
        let (status, json) = get_json("/api/v1/dashboard?today=2024-03-20").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["selectedMonth"], "2024-03");
    }

    #[tokio::test]
    async fn test_unknown_month_is_zero_view() {
        for uri in [
            "/api/v1/dashboard?month=2019-01&today=2024-03-20",
            "/api/v1/dashboard?month=garbage&today=2024-03-20",
        ] {
            let (status, json) = get_json(uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(json["kpis"][1]["value"], "R$ 0.00", "{uri}");
            assert_eq!(json["charts"]["clients"]["points"][0]["category"], "N/D", "{uri}");
        }
    }

    #[tokio::test]
    async fn test_invalid_today_is_bad_request() {
        let (status, json) = get_json("/api/v1/dashboard?month=2024-03&today=20-03-2024").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("20-03-2024"));
    }

    #[tokio::test]
    async fn test_healthz() {
        let (status, json) = get_json("/api/v1/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_index_page_lists_months() {
        let (status, body) = get("/").await;
        let html = String::from_utf8(body).unwrap();

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("<title>Dashboard Livro Caixa</title>"));
        assert!(html.contains(r#"<option value="2024-03" selected>2024-03</option>"#));
        assert!(html.contains(r#"<option value="2024-02">2024-02</option>"#));
    }
}
