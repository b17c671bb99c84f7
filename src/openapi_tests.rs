#[cfg(test)]
mod tests {
    use crate::schemas::ApiDoc;
    use utoipa::openapi::schema::Schema;
    use utoipa::openapi::{PathItemType, RefOr};
    use utoipa::OpenApi;

    fn object_properties(name: &str) -> Vec<String> {
        let openapi = ApiDoc::openapi();
        let components = openapi.components.as_ref().unwrap();
        match components.schemas.get(name) {
            Some(RefOr::T(Schema::Object(obj))) => obj.properties.keys().cloned().collect(),
            other => panic!("{} should be an object schema, got {:?}", name, other.is_some()),
        }
    }

    #[test]
    fn test_openapi_schema_generation() {
        let openapi = ApiDoc::openapi();

        assert!(openapi.components.is_some());
        let components = openapi.components.as_ref().unwrap();
        for schema in [
            "ErrorResponse",
            "HealthResponse",
            "LocalitiesResponse",
            "PredictRequest",
            "PredictionResult",
            "PricePoint",
            "ModelType",
        ] {
            assert!(components.schemas.contains_key(schema), "missing schema {}", schema);
        }

        assert!(serde_json::to_string(&openapi).is_ok());
    }

    #[test]
    fn test_error_response_schema_structure() {
        let properties = object_properties("ErrorResponse");
        assert!(properties.contains(&"error".to_string()));
        assert!(properties.contains(&"details".to_string()));
    }

    #[test]
    fn test_health_response_schema_structure() {
        let properties = object_properties("HealthResponse");
        assert!(properties.contains(&"status".to_string()));
        assert!(properties.contains(&"version".to_string()));
        assert!(properties.contains(&"predictor".to_string()));
    }

    #[test]
    fn test_prediction_result_schema_structure() {
        let properties = object_properties("PredictionResult");
        assert!(properties.contains(&"predicted_data".to_string()));
    }

    #[test]
    fn test_openapi_paths_and_methods() {
        let openapi = ApiDoc::openapi();
        let paths = &openapi.paths.paths;

        for (path, method) in [
            ("/", PathItemType::Get),
            ("/health", PathItemType::Get),
            ("/api/localities", PathItemType::Get),
            ("/api/predict", PathItemType::Post),
            ("/api/predict_trend", PathItemType::Post),
        ] {
            let item = paths.get(path).unwrap_or_else(|| panic!("missing path {}", path));
            assert!(item.operations.contains_key(&method), "{} lacks expected method", path);
        }
    }

    #[test]
    fn test_predict_documents_error_statuses() {
        let openapi = ApiDoc::openapi();
        let predict = openapi.paths.paths.get("/api/predict").unwrap();
        let operation = predict.operations.get(&PathItemType::Post).unwrap();

        let responses = &operation.responses.responses;
        assert!(responses.contains_key("200"));
        assert!(responses.contains_key("400"));
        assert!(responses.contains_key("500"));
    }

    #[test]
    fn test_all_error_responses_reference_correct_schema() {
        let openapi_json = serde_json::to_string(&ApiDoc::openapi()).unwrap();

        assert!(!openapi_json.contains("common.ErrorResponse"));
        assert!(!openapi_json.contains("common::ErrorResponse"));
        assert!(openapi_json.contains("#/components/schemas/ErrorResponse"));
    }

    #[test]
    fn test_success_bodies_reference_shared_schemas() {
        let openapi = ApiDoc::openapi();
        let paths = &openapi.paths.paths;

        let localities = serde_json::to_string(paths.get("/api/localities").unwrap()).unwrap();
        assert!(localities.contains("#/components/schemas/LocalitiesResponse"));
        assert!(localities.contains("#/components/schemas/ErrorResponse"));

        let predict = serde_json::to_string(paths.get("/api/predict").unwrap()).unwrap();
        assert!(predict.contains("#/components/schemas/PredictionResult"));
        assert!(!predict.contains("common.PredictionResult"));
    }
}
