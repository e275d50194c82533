#[cfg(test)]
mod tests {
    use std::fs;

    use reqmock::http::{
        front::FrontController,
        helpers::UrlHelper,
        mock::MockRequest,
        params::{ParamMap, to_param_map},
        router::TemplateRoute,
    };

    fn setup() -> FrontController {
        let mut front = FrontController::new();
        front.set_request(MockRequest::new());
        front
    }

    fn extras() -> ParamMap {
        to_param_map([("bat", "foo"), ("ho", "hum")])
    }

    fn foo_route() -> TemplateRoute {
        TemplateRoute::new(
            "foo/:action/:page",
            to_param_map([
                ("module", "default"),
                ("controller", "foobar"),
                ("action", "bazbat"),
                ("page", "1"),
            ]),
        )
        .unwrap()
    }

    #[test]
    fn test_simple_with_all_params() {
        let front = setup();
        let url = UrlHelper::new(&front).simple("baz", Some("bar"), Some("foo"), Some(&extras()));

        assert!(url.starts_with("/foo/bar/baz"));
        assert!(url.contains("/bat/foo"));
        assert!(url.contains("/ho/hum"));
    }

    #[test]
    fn test_simple_takes_controller_and_module_from_request() {
        let mut front = setup();
        {
            let request = front.request_mut().unwrap();
            request.set_module_name("foo");
            request.set_controller_name("bar");
        }
        let url = UrlHelper::new(&front).simple("baz", None, None, Some(&extras()));

        assert_eq!(url, "/foo/bar/baz/bat/foo/ho/hum");
    }

    #[test]
    fn test_simple_omits_default_module() {
        let front = setup();
        let url =
            UrlHelper::new(&front).simple("baz", Some("bar"), Some("default"), Some(&extras()));
        assert!(url.starts_with("/bar/baz"));
    }

    #[test]
    fn test_simple_without_request_uses_defaults() {
        let front = FrontController::new();
        assert_eq!(UrlHelper::new(&front).simple("list", None, None, None), "/index/list");
    }

    #[test]
    fn test_simple_encodes_params() {
        let front = setup();
        let params = to_param_map([("q", "a b")]);
        let url = UrlHelper::new(&front).simple("find", Some("search"), None, Some(&params));
        assert_eq!(url, "/search/find/q/a+b");
    }

    #[test]
    fn test_url_with_named_route_and_params() {
        let mut front = setup();
        front.router_mut().add_route("foo", foo_route());

        let params = to_param_map([("action", "bar"), ("page", "3")]);
        let url = UrlHelper::new(&front).url(&params, Some("foo")).unwrap();
        assert_eq!(url, "/foo/bar/3");
    }

    #[test]
    fn test_url_with_named_route_and_defaults() {
        let mut front = setup();
        front.router_mut().add_route("foo", foo_route());

        let url = UrlHelper::new(&front).url(&ParamMap::new(), Some("foo")).unwrap();
        assert_eq!(url, "/foo");
    }

    #[test]
    fn test_url_uses_default_route_without_name() {
        let mut front = setup();
        front.add_default_routes();

        let dir = std::env::temp_dir().join(format!("reqmock-url-{}", std::process::id()));
        fs::create_dir_all(dir.join("foo").join("controllers")).unwrap();
        front.add_module_directory(&dir).unwrap();

        let params = to_param_map([
            ("module", "foo"),
            ("controller", "bar"),
            ("action", "baz"),
            ("bat", "foo"),
            ("ho", "hum"),
        ]);
        let url = UrlHelper::new(&front).url(&params, None).unwrap();

        assert!(url.starts_with("/foo/bar/baz"));
        assert!(url.contains("/bat/foo"));
        assert!(url.contains("/ho/hum"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_url_unknown_route_fails() {
        let front = setup();
        assert!(UrlHelper::new(&front).url(&ParamMap::new(), Some("missing")).is_err());
    }

    #[test]
    fn test_direct_proxies_to_simple() {
        let front = setup();
        let helper = UrlHelper::new(&front);
        assert_eq!(
            helper.direct("baz", Some("bar"), Some("foo"), Some(&extras())),
            helper.simple("baz", Some("bar"), Some("foo"), Some(&extras()))
        );
    }

    #[test]
    fn test_base_url_is_assembled_into_url() {
        let mut front = setup();
        front.set_base_url("baseurl");
        {
            let request = front.request_mut().unwrap();
            request.set_module_name("module");
            request.set_controller_name("controller");
        }

        let params = to_param_map([("foo", "bar")]);
        let url = UrlHelper::new(&front).simple("action", None, None, Some(&params));
        assert_eq!(url, "/baseurl/module/controller/action/foo/bar");
    }

    #[test]
    fn test_base_url_prefixes_routed_url() {
        let mut front = setup();
        front.set_base_url("/app/");
        front.router_mut().add_route("foo", foo_route());

        let url = UrlHelper::new(&front).url(&ParamMap::new(), Some("foo")).unwrap();
        assert_eq!(url, "/app/foo");
    }
}
