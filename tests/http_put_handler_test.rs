#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use reqmock::http::{
        front::FrontController,
        middlewares::{Plugin, PutHandler},
        mock::MockRequest,
        req::Request,
    };

    #[test]
    fn test_marshal_put_body_as_params() {
        let mut request = MockRequest::new();
        request.set_method("PUT").set_raw_body("param1=value1&param2=value2");

        PutHandler::new().pre_dispatch(&mut request);

        assert_eq!(request.param("param1"), Some("value1"));
        assert_eq!(request.param("param2"), Some("value2"));
        assert_eq!(request.post_all().len(), 2);
    }

    #[test]
    fn test_decodes_form_encoding() {
        let mut request = MockRequest::new();
        request.set_method("PUT").set_raw_body("name=New+York&tag=a%26b");

        PutHandler::new().pre_dispatch(&mut request);

        assert_eq!(request.post("name"), Some("New York"));
        assert_eq!(request.post("tag"), Some("a&b"));
    }

    #[test]
    fn test_ignores_other_methods() {
        let mut request = MockRequest::new();
        request.set_method("POST").set_raw_body("param1=value1");

        PutHandler::new().pre_dispatch(&mut request);

        assert!(request.param("param1").is_none());
        assert!(request.post_all().is_empty());
    }

    #[test]
    fn test_put_without_body() {
        let mut request = MockRequest::new();
        request.set_method("PUT");

        PutHandler::new().pre_dispatch(&mut request);
        assert!(request.post_all().is_empty());
    }

    #[test]
    fn test_runs_through_front_controller() {
        let mut front = FrontController::new();
        let mut request = MockRequest::new();
        request.set_method("PUT").set_raw_body("a=1");
        front.set_request(request);
        front.register_plugin(Arc::new(PutHandler::new())).unwrap();

        front.pre_dispatch();

        assert_eq!(front.request().unwrap().param("a"), Some("1"));
    }
}
