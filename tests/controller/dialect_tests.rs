//! Dialect option and dialect change tests

#[path = "../common/mod.rs"]
mod common;

use common::{
    ScriptedGateway, connection_failure, processing_failure, ready_controller, transcript,
};
use std::sync::Arc;

#[tokio::test(start_paused = true)]
async fn dialect_options_use_capitalized_labels() {
    let gateway = Arc::new(ScriptedGateway::new());
    gateway.dialect_list(5, &["egyptian", "levantine", "gulf"]);

    let controller = ready_controller(&gateway).await;
    let options = controller.view().dialects.options();

    let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
    let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(labels, vec!["Egyptian", "Levantine", "Gulf"]);
    assert_eq!(values, vec!["egyptian", "levantine", "gulf"]);
}

#[tokio::test(start_paused = true)]
async fn change_dialect_selects_and_renders_confirmation() {
    let gateway = Arc::new(ScriptedGateway::new());
    gateway
        .dialect_list(5, &["egyptian", "gulf"])
        .dialect_change(10, Ok("تم تغيير اللهجة إلى gulf"));
    let mut controller = ready_controller(&gateway).await;

    controller.change_dialect("gulf");
    controller.settle().await;

    assert_eq!(gateway.dialect_requests(), vec!["gulf".to_string()]);
    assert_eq!(
        controller.view().dialects.selected().map(|o| o.value.as_str()),
        Some("gulf")
    );
    assert_eq!(
        transcript(&controller).last(),
        Some(&(false, "تم تغيير اللهجة إلى gulf".to_string()))
    );
}

#[tokio::test(start_paused = true)]
async fn failed_dialect_change_keeps_selection_and_transcript() {
    let gateway = Arc::new(ScriptedGateway::new());
    gateway
        .dialect_list(5, &["egyptian", "gulf"])
        .dialect_change(10, Ok("egyptian"))
        .dialect_change(10, Err(processing_failure("/api/dialect")));
    let mut controller = ready_controller(&gateway).await;
    controller.change_dialect("egyptian");
    controller.settle().await;
    let before = transcript(&controller);

    controller.change_dialect("gulf");
    controller.settle().await;

    assert_eq!(transcript(&controller), before);
    assert_eq!(
        controller.view().dialects.selected().map(|o| o.value.as_str()),
        Some("egyptian")
    );
}

#[tokio::test(start_paused = true)]
async fn superseded_dialect_change_is_ignored() {
    let gateway = Arc::new(ScriptedGateway::new());
    gateway
        .dialect_list(5, &["egyptian", "gulf"])
        .dialect_change(400, Ok("slow egyptian"))
        .dialect_change(100, Ok("fast gulf"));
    let mut controller = ready_controller(&gateway).await;

    controller.change_dialect("egyptian");
    controller.change_dialect("gulf");
    controller.settle().await;

    assert_eq!(
        controller.view().dialects.selected().map(|o| o.value.as_str()),
        Some("gulf")
    );
    let rendered = transcript(&controller);
    assert!(rendered.contains(&(false, "fast gulf".to_string())));
    assert!(!rendered.contains(&(false, "slow egyptian".to_string())));
}

#[tokio::test(start_paused = true)]
async fn reloaded_options_keep_selected_dialect() {
    let gateway = Arc::new(ScriptedGateway::new());
    gateway
        .dialect_list(5, &["egyptian", "gulf"])
        .dialect_change(10, Ok("ok"))
        .dialect_list(5, &["gulf", "maghrebi"]);
    let mut controller = ready_controller(&gateway).await;
    controller.change_dialect("gulf");
    controller.settle().await;

    controller.load_dialect_options();
    controller.settle().await;

    let dialects = &controller.view().dialects;
    assert_eq!(dialects.options().len(), 2);
    assert_eq!(dialects.selected().map(|o| o.value.as_str()), Some("gulf"));
}

#[tokio::test(start_paused = true)]
async fn failed_dialect_reload_keeps_options_and_selection() {
    let gateway = Arc::new(ScriptedGateway::new());
    gateway
        .dialect_list(5, &["egyptian", "gulf"])
        .dialect_change(10, Ok("ok"))
        .dialect_list_error(5, connection_failure("/api/dialects"));
    let mut controller = ready_controller(&gateway).await;
    controller.change_dialect("gulf");
    controller.settle().await;
    let before = transcript(&controller);

    controller.load_dialect_options();
    controller.settle().await;

    let dialects = &controller.view().dialects;
    let values: Vec<&str> = dialects.options().iter().map(|o| o.value.as_str()).collect();
    assert_eq!(values, vec!["egyptian", "gulf"]);
    assert_eq!(dialects.selected().map(|o| o.value.as_str()), Some("gulf"));
    assert_eq!(transcript(&controller), before);
}

#[tokio::test(start_paused = true)]
async fn failed_first_dialect_load_leaves_no_options() {
    let gateway = Arc::new(ScriptedGateway::new());
    gateway.dialect_list_error(5, processing_failure("/api/dialects"));

    let controller = ready_controller(&gateway).await;

    assert!(controller.view().dialects.options().is_empty());
    assert!(controller.view().dialects.selected().is_none());
}
