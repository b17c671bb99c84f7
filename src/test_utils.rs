#[cfg(test)]
pub mod test_utils {
    use crate::router::{create_router, RouterOptions};
    use crate::schemas::AppState;
    use async_trait::async_trait;
    use axum::Router;
    use gateway::{GatewayError, Predictor, PredictorTask};
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    type Responder = dyn Fn(&PredictorTask) -> Result<Value, GatewayError> + Send + Sync;

    /// In-memory predictor that answers from a closure and records every task
    pub struct RecordingPredictor {
        responder: Box<Responder>,
        invocations: AtomicUsize,
        tasks: Mutex<Vec<PredictorTask>>,
    }

    impl RecordingPredictor {
        pub fn new<F>(responder: F) -> Arc<Self>
        where
            F: Fn(&PredictorTask) -> Result<Value, GatewayError> + Send + Sync + 'static,
        {
            Arc::new(Self {
                responder: Box::new(responder),
                invocations: AtomicUsize::new(0),
                tasks: Mutex::new(Vec::new()),
            })
        }

        /// Always answer with the same payload
        pub fn returning(payload: Value) -> Arc<Self> {
            Self::new(move |_| Ok(payload.clone()))
        }

        /// Always fail with the error built by `make_error`
        pub fn failing<F>(make_error: F) -> Arc<Self>
        where
            F: Fn() -> GatewayError + Send + Sync + 'static,
        {
            Self::new(move |_| Err(make_error()))
        }

        pub fn invocations(&self) -> usize {
            self.invocations.load(Ordering::SeqCst)
        }

        pub fn tasks(&self) -> Vec<PredictorTask> {
            self.tasks.lock().expect("task log poisoned").clone()
        }
    }

    #[async_trait]
    impl Predictor for RecordingPredictor {
        async fn run(&self, task: &PredictorTask) -> Result<Value, GatewayError> {
            self.invocations.fetch_add(1, Ordering::SeqCst);
            self.tasks.lock().expect("task log poisoned").push(task.clone());
            (self.responder)(task)
        }

        fn describe(&self) -> String {
            "recording predictor".to_string()
        }
    }

    /// Predictor that answers localities after a fixed delay
    pub struct SlowPredictor {
        pub delay: Duration,
    }

    #[async_trait]
    impl Predictor for SlowPredictor {
        async fn run(&self, _task: &PredictorTask) -> Result<Value, GatewayError> {
            tokio::time::sleep(self.delay).await;
            Ok(json!({"localities": ["Gomti Nagar"]}))
        }

        fn describe(&self) -> String {
            format!("slow predictor ({:?})", self.delay)
        }
    }

    /// Predictor stub behaving like a healthy engine with two localities
    pub fn lucknow_predictor() -> Arc<RecordingPredictor> {
        RecordingPredictor::new(|task| match task {
            PredictorTask::GetLocalities => Ok(json!({"localities": ["Gomti Nagar", "Hazratganj"]})),
            PredictorTask::Predict { locality, model_type, base_year } => {
                if locality != "Gomti Nagar" && locality != "Hazratganj" {
                    return Err(GatewayError::Rejected("Locality not found".to_string()));
                }
                Ok(forecast_payload(model_type, base_year.unwrap_or(2024)))
            }
        })
    }

    /// Five-year forecast: linear grows by 2 lakh a year, polynomial by 3
    pub fn forecast_payload(model_type: &str, base_year: i32) -> Value {
        let step = if model_type == "polynomial" { 300_000 } else { 200_000 };
        let predicted: Vec<Value> = (0..5)
            .map(|i| json!({"year": base_year + i, "price": 5_000_000 + step * i}))
            .collect();
        json!({ "predicted_data": predicted })
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set. Only the first call installs a
    /// subscriber.
    fn init_test_tracing() {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    /// Create axum app for testing around the given predictor
    pub fn setup_test_app_with(predictor: Arc<dyn Predictor>) -> Router {
        setup_test_app_with_options(predictor, RouterOptions::default())
    }

    /// Same as [`setup_test_app_with`] with explicit router options
    pub fn setup_test_app_with_options(predictor: Arc<dyn Predictor>, options: RouterOptions) -> Router {
        init_test_tracing();

        let state = AppState { predictor };
        create_router(state, options)
    }

    /// Create axum app for testing backed by [`lucknow_predictor`]
    pub fn setup_test_app() -> Router {
        setup_test_app_with(lucknow_predictor())
    }
}
