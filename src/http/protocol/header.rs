use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;

use indexmap::IndexMap;

/// 请求头表：保留写入时的名字拼写，查找时忽略大小写
pub type HeaderMap = IndexMap<HeaderKey, String>;

macro_rules! define_header_keys {
    ($($name:ident => $string:expr),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum HeaderKey {
            $($name,)*
            Custom(String),
        }

        impl HeaderKey {
            /// 空名字返回 None，其余一律可解析
            pub fn from_str(s: &str) -> Option<Self> {
                let s_trimmed = s.trim();
                if s_trimmed.is_empty() {
                    return None;
                }
                $(
                    if s_trimmed.eq_ignore_ascii_case($string) {
                        return Some(HeaderKey::$name);
                    }
                )*
                // 自定义头保留原始拼写
                Some(HeaderKey::Custom(s_trimmed.to_string()))
            }

            pub fn as_str(&self) -> &str {
                match self {
                    $(
                        HeaderKey::$name => $string,
                    )*
                    HeaderKey::Custom(s) => s.as_str(),
                }
            }
        }
    };
}

define_header_keys! {
    Accept => "Accept",
    AcceptCharset => "Accept-Charset",
    AcceptEncoding => "Accept-Encoding",
    AcceptLanguage => "Accept-Language",
    Authorization => "Authorization",
    CacheControl => "Cache-Control",
    Connection => "Connection",
    ContentEncoding => "Content-Encoding",
    ContentLength => "Content-Length",
    ContentType => "Content-Type",
    Cookie => "Cookie",
    Host => "Host",
    IfModifiedSince => "If-Modified-Since",
    IfNoneMatch => "If-None-Match",
    Origin => "Origin",
    Referer => "Referer",
    UserAgent => "User-Agent",
    XForwardedFor => "X-Forwarded-For",
    XHttpMethodOverride => "X-HTTP-Method-Override",
    XRequestedWith => "X-Requested-With",
}

// 仅在比较和哈希时忽略大小写，不影响存储

impl PartialEq for HeaderKey {
    fn eq(&self, other: &Self) -> bool {
        self.as_str().eq_ignore_ascii_case(other.as_str())
    }
}

impl Eq for HeaderKey {}

impl Hash for HeaderKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for b in self.as_str().bytes() {
            state.write_u8(b.to_ascii_lowercase());
        }
    }
}

impl fmt::Display for HeaderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
