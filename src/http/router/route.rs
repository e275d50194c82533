use once_cell::sync::Lazy;
use regex::Regex;

use crate::http::{
    params::{ParamMap, encode_segment},
    router::{Route, RouteError},
};

// :name 变量段
const VARIABLE: &str = r"^:([A-Za-z_][A-Za-z0-9_\-]*)$";

static VARIABLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(VARIABLE).expect("valid variable regex"));

/// 模板段类型
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    Static(String),   // 静态段
    Variable(String), // 变量段 :page
    Wildcard,         // 通配符 *
}

enum Part<'a> {
    Static(&'a str),
    Variable(&'a str, &'a str),
    Extra(&'a str),
}

fn encode_if(value: &str, encode: bool) -> String {
    if encode {
        encode_segment(value)
    } else {
        value.to_string()
    }
}

/// `foo/:action/:page` 形式的模板路由
#[derive(Clone, Debug)]
pub struct TemplateRoute {
    template: String,
    segments: Vec<Segment>,
    defaults: ParamMap,
}

impl TemplateRoute {
    pub fn new(template: &str, defaults: ParamMap) -> Result<Self, RouteError> {
        let segments = Self::parse(template)?;
        Ok(Self {
            template: template.trim_matches('/').to_string(),
            segments,
            defaults,
        })
    }

    fn parse(template: &str) -> Result<Vec<Segment>, RouteError> {
        let mut segments = Vec::new();
        for seg in template.split('/').filter(|s| !s.is_empty()) {
            if seg == "*" {
                segments.push(Segment::Wildcard);
            } else if seg.starts_with(':') {
                let caps = VARIABLE_RE
                    .captures(seg)
                    .ok_or_else(|| RouteError::InvalidTemplate(template.to_string()))?;
                segments.push(Segment::Variable(caps[1].to_string()));
            } else {
                segments.push(Segment::Static(seg.to_string()));
            }
        }
        Ok(segments)
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    fn is_variable(&self, key: &str) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Variable(name) if name == key))
    }
}

impl Route for TemplateRoute {
    fn assemble(&self, data: &ParamMap, encode: bool) -> Result<String, RouteError> {
        let mut parts: Vec<Part<'_>> = Vec::with_capacity(self.segments.len());

        for seg in &self.segments {
            match seg {
                Segment::Static(s) => parts.push(Part::Static(s.as_str())),
                Segment::Variable(name) => {
                    let value = data
                        .get(name)
                        .or_else(|| self.defaults.get(name))
                        .ok_or_else(|| RouteError::MissingParameter(name.clone()))?;
                    parts.push(Part::Variable(name.as_str(), value.as_str()));
                }
                Segment::Wildcard => {
                    // 变量和等于默认值的键不进入通配部分
                    let extras = data.iter().filter(|(k, v)| {
                        !self.is_variable(k) && self.defaults.get(k.as_str()) != Some(*v)
                    });
                    for (k, v) in extras {
                        parts.push(Part::Extra(k.as_str()));
                        parts.push(Part::Extra(v.as_str()));
                    }
                }
            }
        }

        // 从尾部起丢弃等于默认值的变量段，遇到第一个保留段后全部保留
        let mut keep = false;
        let mut out = Vec::with_capacity(parts.len());
        for part in parts.into_iter().rev() {
            let segment = match part {
                Part::Static(s) => s.to_string(),
                Part::Variable(name, value) => {
                    if !keep && self.defaults.get(name).map(String::as_str) == Some(value) {
                        continue;
                    }
                    encode_if(value, encode)
                }
                Part::Extra(value) => encode_if(value, encode),
            };
            keep = true;
            out.push(segment);
        }
        out.reverse();
        Ok(out.join("/"))
    }

    fn defaults(&self) -> &ParamMap {
        &self.defaults
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::params::to_param_map;

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
    fn test_parse_segments() {
        let route = TemplateRoute::new("/blog/:slug/*", ParamMap::new()).unwrap();
        assert_eq!(
            route.segments(),
            &[
                Segment::Static("blog".into()),
                Segment::Variable("slug".into()),
                Segment::Wildcard,
            ]
        );
        assert_eq!(route.template(), "blog/:slug/*");
    }

    #[test]
    fn test_invalid_variable_name() {
        let err = TemplateRoute::new("foo/:/bar", ParamMap::new()).unwrap_err();
        assert!(matches!(err, RouteError::InvalidTemplate(_)));
    }

    #[test]
    fn test_assemble_with_values() {
        let data = to_param_map([("action", "bar"), ("page", "3")]);
        assert_eq!(foo_route().assemble(&data, true).unwrap(), "foo/bar/3");
    }

    #[test]
    fn test_trailing_defaults_are_dropped() {
        let route = foo_route();
        assert_eq!(route.assemble(&ParamMap::new(), true).unwrap(), "foo");

        // page 不是默认值，前面的 action 必须保留
        let data = to_param_map([("page", "2")]);
        assert_eq!(route.assemble(&data, true).unwrap(), "foo/bazbat/2");
    }

    #[test]
    fn test_missing_parameter() {
        let route = TemplateRoute::new("user/:id", ParamMap::new()).unwrap();
        assert_eq!(
            route.assemble(&ParamMap::new(), true).unwrap_err(),
            RouteError::MissingParameter("id".into())
        );
    }

    #[test]
    fn test_wildcard_and_encoding() {
        let route = TemplateRoute::new("search/:q/*", ParamMap::new()).unwrap();
        let data = to_param_map([("q", "rust lang"), ("sort", "a&b")]);
        assert_eq!(route.assemble(&data, true).unwrap(), "search/rust+lang/sort/a%26b");
        assert_eq!(route.assemble(&data, false).unwrap(), "search/rust lang/sort/a&b");
    }

    #[test]
    fn test_wildcard_skips_default_values() {
        let route = TemplateRoute::new(
            "blog/:slug/*",
            to_param_map([("module", "default"), ("controller", "blog")]),
        )
        .unwrap();
        let data = to_param_map([
            ("slug", "x"),
            ("module", "default"),
            ("controller", "blog"),
            ("page", "2"),
        ]);
        assert_eq!(route.assemble(&data, true).unwrap(), "blog/x/page/2");

        // 与默认值不同的键照常输出
        let data = to_param_map([("slug", "x"), ("controller", "news")]);
        assert_eq!(route.assemble(&data, true).unwrap(), "blog/x/controller/news");
    }
}
