// @awa-component: MCP-HookTests

use std::collections::HashSet;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::access_control::AccessControlHook;
use super::{
    HookContext, HookError, HookPipeline, HookScope, ToolCallOutcome, ToolHook, default_pipeline,
};

/// Test hook that records call order.
struct OrderTracker {
    name: String,
    before_order: Arc<Mutex<Vec<String>>>,
    after_order: Arc<Mutex<Vec<String>>>,
}

impl OrderTracker {
    fn new(
        name: &str,
        before_order: &Arc<Mutex<Vec<String>>>,
        after_order: &Arc<Mutex<Vec<String>>>,
    ) -> Arc<dyn ToolHook> {
        Arc::new(Self {
            name: name.to_string(),
            before_order: before_order.clone(),
            after_order: after_order.clone(),
        })
    }
}

#[async_trait]
impl ToolHook for OrderTracker {
    async fn before_call(
        &self,
        _ctx: &HookContext,
        _params: &mut serde_json::Value,
    ) -> Result<(), HookError> {
        self.before_order.lock().unwrap().push(self.name.clone());
        Ok(())
    }

    async fn after_call(
        &self,
        _ctx: &HookContext,
        _outcome: &mut ToolCallOutcome,
    ) -> Result<(), HookError> {
        self.after_order.lock().unwrap().push(self.name.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Test hook that rejects in before_call.
struct RejectHook;

#[async_trait]
impl ToolHook for RejectHook {
    async fn before_call(
        &self,
        _ctx: &HookContext,
        _params: &mut serde_json::Value,
    ) -> Result<(), HookError> {
        Err(HookError::AccessDenied("rejected".into()))
    }

    async fn after_call(
        &self,
        _ctx: &HookContext,
        _outcome: &mut ToolCallOutcome,
    ) -> Result<(), HookError> {
        Ok(())
    }

    fn name(&self) -> &str {
        "RejectHook"
    }
}

/// Counts before_call invocations.
struct CountingHook(Arc<AtomicU32>);

#[async_trait]
impl ToolHook for CountingHook {
    async fn before_call(
        &self,
        _ctx: &HookContext,
        _params: &mut serde_json::Value,
    ) -> Result<(), HookError> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn after_call(
        &self,
        _ctx: &HookContext,
        _outcome: &mut ToolCallOutcome,
    ) -> Result<(), HookError> {
        Ok(())
    }

    fn name(&self) -> &str {
        "CountingHook"
    }
}

fn make_ctx() -> HookContext {
    HookContext::new("run_job")
}

#[tokio::test]
async fn pipeline_before_call_order() {
    let before_order = Arc::new(Mutex::new(Vec::new()));
    let after_order = Arc::new(Mutex::new(Vec::new()));

    let pipeline = HookPipeline::new(vec![
        (HookScope::Global, OrderTracker::new("A", &before_order, &after_order)),
        (HookScope::Global, OrderTracker::new("B", &before_order, &after_order)),
    ]);
    let mut params = serde_json::json!({});

    pipeline.run_before(&make_ctx(), &mut params).await.unwrap();

    assert_eq!(*before_order.lock().unwrap(), vec!["A", "B"]);
}

#[tokio::test]
async fn pipeline_after_call_reverse_order() {
    let before_order = Arc::new(Mutex::new(Vec::new()));
    let after_order = Arc::new(Mutex::new(Vec::new()));

    let pipeline = HookPipeline::new(vec![
        (HookScope::Global, OrderTracker::new("A", &before_order, &after_order)),
        (HookScope::Global, OrderTracker::new("B", &before_order, &after_order)),
    ]);
    let mut outcome = ToolCallOutcome::Success(serde_json::json!({}));

    pipeline.run_after(&make_ctx(), &mut outcome).await.unwrap();

    assert_eq!(*after_order.lock().unwrap(), vec!["B", "A"]);
}

#[tokio::test]
async fn pipeline_short_circuits_on_error() {
    let counter = Arc::new(AtomicU32::new(0));

    let hooks: Vec<(HookScope, Arc<dyn ToolHook>)> = vec![
        (HookScope::Global, Arc::new(RejectHook)),
        (HookScope::Global, Arc::new(CountingHook(counter.clone()))),
    ];
    let pipeline = HookPipeline::new(hooks);
    let mut params = serde_json::json!({});

    let result = pipeline.run_before(&make_ctx(), &mut params).await;

    assert!(result.is_err());
    assert_eq!(counter.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn empty_pipeline_is_noop() {
    let pipeline = HookPipeline::empty();
    let mut params = serde_json::json!({});
    let mut outcome = ToolCallOutcome::Success(serde_json::json!({}));

    pipeline.run_before(&make_ctx(), &mut params).await.unwrap();
    pipeline.run_after(&make_ctx(), &mut outcome).await.unwrap();
}

#[tokio::test]
async fn tool_scope_only_matches_named_tool() {
    let before_order = Arc::new(Mutex::new(Vec::new()));
    let after_order = Arc::new(Mutex::new(Vec::new()));

    let pipeline = HookPipeline::new(vec![
        (HookScope::Global, OrderTracker::new("global", &before_order, &after_order)),
        (
            HookScope::Tool("create_job_template".into()),
            OrderTracker::new("create-only", &before_order, &after_order),
        ),
    ]);
    let mut params = serde_json::json!({});

    pipeline.run_before(&make_ctx(), &mut params).await.unwrap();
    assert_eq!(*before_order.lock().unwrap(), vec!["global"]);
    before_order.lock().unwrap().clear();

    let ctx = HookContext::new("create_job_template");
    pipeline.run_before(&ctx, &mut params).await.unwrap();
    assert_eq!(
        *before_order.lock().unwrap(),
        vec!["global", "create-only"]
    );
}

#[tokio::test]
async fn access_control_blocks_disabled_tools() {
    let hook = AccessControlHook::new(HashSet::from(["run_job".to_string()]));
    let mut params = serde_json::json!({});

    let denied = hook.before_call(&make_ctx(), &mut params).await;
    assert!(matches!(denied, Err(HookError::AccessDenied(_))));

    let allowed = hook
        .before_call(&HookContext::new("get_job"), &mut params)
        .await;
    assert!(allowed.is_ok());
}

#[tokio::test]
async fn default_pipeline_allows_everything_when_nothing_disabled() {
    let pipeline = default_pipeline(HashSet::new());
    let mut params = serde_json::json!({ "template_id": 1 });
    let mut outcome = ToolCallOutcome::Error("boom".into());

    pipeline.run_before(&make_ctx(), &mut params).await.unwrap();
    pipeline.run_after(&make_ctx(), &mut outcome).await.unwrap();
}
