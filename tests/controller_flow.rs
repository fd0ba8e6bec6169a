mod support;

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use support::http::{OneShotServer, refused_base_url};
use toxcheck::config::{EndpointSource, ServiceEndpoint};
use toxcheck::egui_app::controller::EguiController;
use toxcheck::egui_app::state::RequestPhase;
use toxcheck::egui_app::view_model::{self, ResultTone};
use toxcheck::prediction::PredictionClient;

fn controller_for(base_url: &str) -> EguiController {
    let endpoint =
        ServiceEndpoint::new(base_url, Some(Duration::from_secs(5)), EndpointSource::Default)
            .expect("valid test endpoint");
    EguiController::new(Arc::new(PredictionClient::new(&endpoint)), base_url)
}

fn wait_until_settled(controller: &mut EguiController) {
    for _ in 0..1000 {
        controller.poll_background_jobs();
        if !controller.ui.loading {
            return;
        }
        thread::sleep(Duration::from_millis(5));
    }
    panic!("classification did not settle");
}

#[test]
fn toxic_scenario_end_to_end() {
    let server = OneShotServer::ok_json(r#"{"label":"toxic","confidence":0.93}"#);
    let mut controller = controller_for(&server.base_url);

    controller.update_text("you are the worst");
    assert!(controller.request_classification());
    assert_eq!(controller.phase(), RequestPhase::Pending);
    assert_eq!(view_model::analyze_label(controller.ui.loading), "🔍 Analyzing…");
    wait_until_settled(&mut controller);

    let body: serde_json::Value = serde_json::from_str(&server.captured().body).unwrap();
    assert_eq!(body, serde_json::json!({ "text": "you are the worst" }));

    let result = controller.ui.result.expect("result stored");
    let view = view_model::result_view(&result);
    assert_eq!(view.verdict, "⚠️ Toxic content detected");
    assert_eq!(view.percent, 93);
    assert_eq!(view.confidence_text, "📊 Confidence: 93%");
    assert_eq!(view.tone, ResultTone::Toxic);
}

#[test]
fn safe_scenario_end_to_end() {
    let server = OneShotServer::ok_json(r#"{"label":"non_toxic","confidence":0.95}"#);
    let mut controller = controller_for(&server.base_url);

    controller.update_text("have a nice day");
    controller.request_classification();
    wait_until_settled(&mut controller);

    let view = view_model::result_view(&controller.ui.result.expect("result stored"));
    assert_eq!(view.verdict, "✅ Content looks safe");
    assert_eq!(view.percent, 95);
    assert_eq!(view.tone, ResultTone::Safe);
}

#[test]
fn unreachable_service_settles_to_failed() {
    let mut controller = controller_for(&refused_base_url());
    controller.update_text("anything");
    controller.request_classification();
    wait_until_settled(&mut controller);

    assert_eq!(controller.phase(), RequestPhase::Failed);
    assert!(controller.ui.result.is_none());
    let reason = controller.ui.last_error.clone().expect("failure recorded");
    assert!(view_model::failure_text(&reason).starts_with("❌ Classification failed: "));

    controller.reset();
    assert_eq!(controller.phase(), RequestPhase::Idle);
    assert_eq!(controller.ui.input, "");
}
