//! Tests for API module
//!
//! Tests error types, request/response types, and handler functions.

use crate::common::{gk1_registry, memory_registry};

// =============================================================================
// ERROR TYPES
// =============================================================================

mod error_tests {
    use ncc_quiz::api::ApiError;
    use ncc_quiz::error::StoreError;
    use ncc_quiz::{EntityKind, RegistryError};

    #[test]
    fn test_error_code_not_found() {
        let err = ApiError::not_found("Cadet not found");
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.message, "Cadet not found");
    }

    #[test]
    fn test_error_code_bad_request() {
        let err = ApiError::bad_request("Invalid input");
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::not_found("Resource missing");
        let display = format!("{err}");
        assert!(display.contains("NOT_FOUND"));
        assert!(display.contains("Resource missing"));
    }

    #[test]
    fn test_from_registry_not_found() {
        let err: ApiError = RegistryError::not_found(EntityKind::Quiz, "GK1").into();
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.message, "quiz not found: GK1");
    }

    #[test]
    fn test_from_registry_malformed() {
        let err: ApiError = RegistryError::Malformed("2 question(s) but 1 answer(s)".into()).into();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.message, "2 question(s) but 1 answer(s)");
    }

    #[test]
    fn test_from_registry_persistence() {
        let err: ApiError =
            RegistryError::Persistence(StoreError::Unavailable("disk full".into())).into();
        assert_eq!(err.status_code(), 500);
        assert!(err.message.contains("disk full"));
    }
}

// =============================================================================
// RESPONSE TYPES
// =============================================================================

mod response_tests {
    use ncc_quiz::api::{ApiError, ApiResponse};

    #[test]
    fn test_api_response_success() {
        let resp: ApiResponse<String> = ApiResponse::success("hello".to_string());
        assert!(resp.success);
        assert_eq!(resp.data, Some("hello".to_string()));
        assert!(resp.error.is_none());
    }

    #[test]
    fn test_api_response_error_serializes() {
        let resp = ApiResponse::<()>::error(&ApiError::not_found("Cadet not found"));
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"success\":false"));
        assert!(json.contains("\"code\":\"NOT_FOUND\""));
        assert!(!json.contains("\"data\""));
    }
}

// =============================================================================
// REQUEST TYPES
// =============================================================================

mod request_tests {
    use ncc_quiz::api::{AttemptRequest, CreateQuizRequest, RegisterCadetRequest};

    #[test]
    fn test_attempt_request_defaults_answers() {
        let req: AttemptRequest = serde_json::from_str(r#"{"quiz_name": "GK1"}"#).unwrap();
        assert_eq!(req.quiz_name, "GK1");
        assert!(req.answers.is_empty());
    }

    #[test]
    fn test_create_quiz_request() {
        let json = r#"{"quiz_name": "GK1", "questions": ["Q1"], "answers": ["A1"]}"#;
        let req: CreateQuizRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.questions, ["Q1"]);
        assert_eq!(req.answers, ["A1"]);
    }

    #[test]
    fn test_register_cadet_request_missing_college() {
        let req: RegisterCadetRequest =
            serde_json::from_str(r#"{"phone": "222", "name": "Asha"}"#).unwrap();
        assert_eq!(req.college, "");
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

mod handler_tests {
    use ncc_quiz::api::{
        self, AttemptRequest, CreateQuizRequest, LoginNext, LoginRequest, RegisterCadetRequest,
        RegisterInstitutionRequest,
    };

    use super::{gk1_registry, memory_registry};

    fn login(phone: &str) -> LoginRequest {
        LoginRequest {
            phone: phone.to_string(),
        }
    }

    #[test]
    fn test_institution_login_routes_to_register_then_dashboard() {
        let registry = memory_registry();

        let before = api::institution_login(&registry, &login("111")).unwrap();
        assert!(!before.registered);
        assert_eq!(before.next, LoginNext::Register);

        let req = RegisterInstitutionRequest {
            phone: "111".to_string(),
            name: "Delhi Academy".to_string(),
        };
        api::register_institution(&registry, &req).unwrap();

        let after = api::institution_login(&registry, &login("111")).unwrap();
        assert!(after.registered);
        assert_eq!(after.next, LoginNext::Dashboard);
    }

    #[test]
    fn test_login_rejects_blank_phone() {
        let registry = memory_registry();
        let err = api::cadet_login(&registry, &login("  ")).unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_register_trims_phone() {
        let registry = memory_registry();
        let req = RegisterCadetRequest {
            phone: " 222 ".to_string(),
            name: "Asha".to_string(),
            college: "NCC".to_string(),
        };
        let data = api::register_cadet(&registry, &req).unwrap();
        assert_eq!(data.phone, "222");
        assert!(registry.find_cadet("222").is_some());
    }

    #[test]
    fn test_institution_dashboard_lists_own_quizzes() {
        let registry = gk1_registry();
        registry.create_quiz("333", "Other", vec![], vec![]).unwrap();

        let data = api::institution_dashboard(&registry, "111").unwrap();
        assert_eq!(data.name, "Delhi Academy");
        assert_eq!(data.quizzes.len(), 1);
        assert_eq!(data.quizzes[0].quiz_name, "GK1");
        assert_eq!(data.quizzes[0].questions, 1);
    }

    #[test]
    fn test_institution_dashboard_unknown() {
        let registry = memory_registry();
        let err = api::institution_dashboard(&registry, "999").unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn test_create_quiz_mismatch_is_bad_request() {
        let registry = memory_registry();
        let req = CreateQuizRequest {
            quiz_name: "GK1".to_string(),
            questions: vec!["Q1".to_string(), "Q2".to_string()],
            answers: vec!["A1".to_string()],
        };
        let err = api::create_quiz(&registry, "111", &req).unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_open_quizzes_withhold_answers() {
        let registry = gk1_registry();
        let data = api::list_open_quizzes(&registry, "222").unwrap();

        assert_eq!(data.quizzes.len(), 1);
        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains("Capital of India?"));
        assert!(!json.contains("delhi"));
    }

    #[test]
    fn test_submit_attempt_reports_score() {
        let registry = gk1_registry();
        let req = AttemptRequest {
            quiz_name: "GK1".to_string(),
            answers: vec!["Delhi".to_string()],
        };
        let data = api::submit_attempt(&registry, "222", &req).unwrap();

        assert_eq!(data.score, 1);
        assert_eq!(data.out_of, 1);
        assert_eq!(api::cadet_dashboard(&registry, "222").unwrap().total, 1);
        assert!(api::list_open_quizzes(&registry, "222").unwrap().quizzes.is_empty());
    }

    #[test]
    fn test_submit_attempt_unknown_quiz() {
        let registry = gk1_registry();
        let req = AttemptRequest {
            quiz_name: "Nope".to_string(),
            answers: vec![],
        };
        let err = api::submit_attempt(&registry, "222", &req).unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn test_leaderboard_ranks_from_one() {
        let registry = gk1_registry();
        registry.register_cadet("333", "Ravi", "Pune").unwrap();
        registry.submit_attempt("333", "GK1", &["delhi"]).unwrap();

        let data = api::get_leaderboard(&registry).unwrap();
        let rows: Vec<_> = data.entries.iter().map(|r| (r.rank, r.name.as_str())).collect();
        assert_eq!(rows, [(1, "Ravi"), (2, "Asha")]);
    }

    #[test]
    fn test_stats() {
        let registry = gk1_registry();
        let stats = api::get_stats(&registry).unwrap();
        assert_eq!((stats.institutions, stats.cadets, stats.quizzes), (1, 1, 1));
    }
}
