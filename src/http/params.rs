use indexmap::IndexMap;

/// 字符串键值表，迭代顺序即插入顺序
pub type ParamMap = IndexMap<String, String>;

/// 解析 `application/x-www-form-urlencoded` 字符串
///
/// 重复的 key 以最后一次出现为准；没有 `=` 的 key 得到空字符串。
pub fn parse_pairs(pairs: &str) -> ParamMap {
    let mut map = ParamMap::new();
    for (k, v) in form_urlencoded::parse(pairs.as_bytes()) {
        map.insert(k.into_owned(), v.into_owned());
    }
    map
}

/// 从任意 (K, V) 序列构造 ParamMap
pub fn to_param_map<I, K, V>(pairs: I) -> ParamMap
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// 按表单规则编码单个路径段（空格编码为 `+`）
pub fn encode_segment(segment: &str) -> String {
    form_urlencoded::byte_serialize(segment.as_bytes()).collect()
}
