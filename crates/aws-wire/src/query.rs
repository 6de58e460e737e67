//! Query protocol parameter serialization.
//!
//! Nested structures use dotted names (`Outer.Inner`), and lists use 1-based member indices
//! (`Name.member.1`).
use std::borrow::Cow;

use indexmap::IndexMap;

use crate::request::{ACTION_PARAM, VERSION_PARAM, WireRequest};
use crate::{Error, Service};

/// A scalar value that can be written as a single query parameter.
pub trait QueryValue {
    fn write_query_value(&self, dst: &mut String);
}

/// A structure that writes its members as parameters, relative to whatever prefix the
/// [`QueryWriter`] currently has.
pub trait QueryStruct {
    fn write_members(&self, writer: &mut QueryWriter<'_>);
}

/// An operation sent via the query protocol.
pub trait QueryOperation: Sized {
    const SERVICE: Service;
    const ACTION: &'static str;

    /// Writes any operation specific parameters. Defaults to writing nothing, for operations
    /// without input members.
    fn write_params(&self, _writer: &mut QueryWriter<'_>) {}
}

/// Builds a [`WireRequest`] for a query operation, with `Action` and `Version` as the first 2
/// parameters.
pub fn marshall<R: QueryOperation>(request: Option<R>) -> crate::Result<WireRequest<R>> {
    let Some(request) = request else {
        return Err(Error::invalid_marshall_argument());
    };

    let mut wire = WireRequest::new(request, R::SERVICE.name);
    wire.add_parameter(ACTION_PARAM, R::ACTION);
    wire.add_parameter(VERSION_PARAM, R::SERVICE.api_version);

    // split the borrow so the writer can read from the original while writing params.
    let (original, mut writer) = wire.split_for_query();
    original.write_params(&mut writer);

    tracing::debug!(
        service = R::SERVICE.name,
        action = R::ACTION,
        params = wire.parameters().len(),
        "marshalled query request"
    );

    Ok(wire)
}

pub struct QueryWriter<'a> {
    params: &'a mut IndexMap<Cow<'static, str>, String>,
    prefix: String,
}

impl<'a> QueryWriter<'a> {
    pub(crate) fn new(params: &'a mut IndexMap<Cow<'static, str>, String>) -> Self {
        Self {
            params,
            prefix: String::new(),
        }
    }

    fn key(&self, name: &str) -> String {
        let mut key = String::with_capacity(self.prefix.len() + name.len());
        key.push_str(&self.prefix);
        key.push_str(name);
        key
    }

    fn nested(&mut self, prefix: String) -> QueryWriter<'_> {
        QueryWriter {
            params: &mut *self.params,
            prefix,
        }
    }

    fn insert<V: QueryValue + ?Sized>(&mut self, key: String, value: &V) {
        let mut dst = String::new();
        value.write_query_value(&mut dst);
        self.params.insert(Cow::Owned(key), dst);
    }

    /// Writes `name=value`, or nothing if `value` is [`None`].
    pub fn value<V: QueryValue + ?Sized>(&mut self, name: &str, value: Option<&V>) -> &mut Self {
        if let Some(value) = value {
            let key = self.key(name);
            self.insert(key, value);
        }
        self
    }

    /// Writes each item as `name.member.N=value`. A present, but empty list is still written
    /// as `name=` so the service can tell it apart from an unset list.
    pub fn list<V: QueryValue>(&mut self, name: &str, values: Option<&[V]>) -> &mut Self {
        let Some(values) = values else {
            return self;
        };

        let key = self.key(name);

        if values.is_empty() {
            self.params.insert(Cow::Owned(key), String::new());
            return self;
        }

        for (idx, value) in values.iter().enumerate() {
            self.insert(member_key(&key, idx), value);
        }

        self
    }

    /// Same as [`QueryWriter::list`], but each member is a nested structure, written under
    /// `name.member.N.`.
    pub fn structure_list<S: QueryStruct>(
        &mut self,
        name: &str,
        values: Option<&[S]>,
    ) -> &mut Self {
        let Some(values) = values else {
            return self;
        };

        let key = self.key(name);

        if values.is_empty() {
            self.params.insert(Cow::Owned(key), String::new());
            return self;
        }

        for (idx, value) in values.iter().enumerate() {
            let mut prefix = member_key(&key, idx);
            prefix.push('.');
            value.write_members(&mut self.nested(prefix));
        }

        self
    }

    /// Writes the members of a nested structure under `name.`.
    pub fn structure<S: QueryStruct + ?Sized>(
        &mut self,
        name: &str,
        value: Option<&S>,
    ) -> &mut Self {
        if let Some(value) = value {
            let mut prefix = self.key(name);
            prefix.push('.');
            value.write_members(&mut self.nested(prefix));
        }
        self
    }
}

/// Builds `{key}.member.{idx + 1}`.
fn member_key(key: &str, idx: usize) -> String {
    let mut buf = itoa::Buffer::new();
    let idx = buf.format(idx + 1);

    // extra 1 leaves room for a trailing '.' when used as a nested prefix
    let mut member_key = String::with_capacity(key.len() + ".member.".len() + idx.len() + 1);
    member_key.push_str(key);
    member_key.push_str(".member.");
    member_key.push_str(idx);
    member_key
}

impl<T: QueryValue + ?Sized> QueryValue for &T {
    #[inline]
    fn write_query_value(&self, dst: &mut String) {
        T::write_query_value(self, dst)
    }
}

impl QueryValue for str {
    #[inline]
    fn write_query_value(&self, dst: &mut String) {
        dst.push_str(self);
    }
}

impl QueryValue for String {
    #[inline]
    fn write_query_value(&self, dst: &mut String) {
        dst.push_str(self);
    }
}

impl QueryValue for bool {
    #[inline]
    fn write_query_value(&self, dst: &mut String) {
        dst.push_str(if *self { "true" } else { "false" });
    }
}

impl QueryValue for char {
    #[inline]
    fn write_query_value(&self, dst: &mut String) {
        dst.push(*self);
    }
}

macro_rules! impl_for_ints {
    ($($t:ty),* $(,)?) => {
        $(
            impl QueryValue for $t {
                #[inline]
                fn write_query_value(&self, dst: &mut String) {
                    dst.push_str(itoa::Buffer::new().format(*self));
                }
            }
        )*
    };
}

impl_for_ints! {
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SERVICE: Service = Service {
        name: "AmazonTestService",
        endpoint_prefix: "test",
        api_version: "2020-01-01",
    };

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Empty;

    impl QueryOperation for Empty {
        const SERVICE: Service = SERVICE;
        const ACTION: &'static str = "DoNothing";
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Inner {
        name: Option<String>,
        count: Option<u32>,
    }

    impl QueryStruct for Inner {
        fn write_members(&self, writer: &mut QueryWriter<'_>) {
            writer
                .value("Name", self.name.as_deref())
                .value("Count", self.count.as_ref());
        }
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Everything {
        flag: Option<bool>,
        tags: Option<Vec<String>>,
        inner: Option<Inner>,
        inners: Option<Vec<Inner>>,
    }

    impl QueryOperation for Everything {
        const SERVICE: Service = SERVICE;
        const ACTION: &'static str = "DoEverything";

        fn write_params(&self, writer: &mut QueryWriter<'_>) {
            writer
                .value("Flag", self.flag.as_ref())
                .list("Tags", self.tags.as_deref())
                .structure("Inner", self.inner.as_ref())
                .structure_list("Inners", self.inners.as_deref());
        }
    }

    fn params<R>(wire: &WireRequest<R>) -> Vec<(&str, &str)> {
        wire.parameters().collect()
    }

    #[test]
    fn test_marshall_none() {
        let error = marshall::<Empty>(None).unwrap_err();
        assert!(error.is_invalid_argument());
    }

    #[test]
    fn test_marshall_action_version() {
        let wire = marshall(Some(Empty)).unwrap();

        assert_eq!(wire.service_name(), "AmazonTestService");
        assert_eq!(wire.action(), Some("DoNothing"));
        assert_eq!(wire.version(), Some("2020-01-01"));
        assert_eq!(
            params(&wire),
            [("Action", "DoNothing"), ("Version", "2020-01-01")]
        );
        assert_eq!(*wire.original(), Empty);
    }

    #[test]
    fn test_unset_members_skipped() {
        let wire = marshall(Some(Everything::default())).unwrap();
        assert_eq!(wire.parameters().len(), 2);
    }

    #[test]
    fn test_nested_and_lists() {
        let request = Everything {
            flag: Some(false),
            tags: Some(vec![String::from("a"), String::from("b c")]),
            inner: Some(Inner {
                name: Some(String::from("inner")),
                count: Some(3),
            }),
            inners: Some(vec![
                Inner {
                    name: Some(String::from("first")),
                    count: None,
                },
                Inner {
                    name: None,
                    count: Some(2),
                },
            ]),
        };

        let wire = marshall(Some(request)).unwrap();

        assert_eq!(
            params(&wire),
            [
                ("Action", "DoEverything"),
                ("Version", "2020-01-01"),
                ("Flag", "false"),
                ("Tags.member.1", "a"),
                ("Tags.member.2", "b c"),
                ("Inner.Name", "inner"),
                ("Inner.Count", "3"),
                ("Inners.member.1.Name", "first"),
                ("Inners.member.2.Count", "2"),
            ]
        );

        assert_eq!(
            wire.encode_parameters(),
            "Action=DoEverything&Version=2020-01-01&Flag=false&Tags.member.1=a&\
             Tags.member.2=b%20c&Inner.Name=inner&Inner.Count=3&Inners.member.1.Name=first&\
             Inners.member.2.Count=2"
        );
    }

    #[test]
    fn test_empty_list_written() {
        let request = Everything {
            tags: Some(vec![]),
            ..Default::default()
        };

        let wire = marshall(Some(request)).unwrap();
        assert_eq!(wire.parameter("Tags"), Some(""));
        assert_eq!(wire.parameter("Tags.member.1"), None);
    }

    #[test]
    fn test_writer_on_wire_request() {
        let mut wire = WireRequest::new((), "AmazonTestService");
        wire.query_writer()
            .value("Int", Some(&-12_i64))
            .value("Char", Some(&'x'))
            .value::<str>("Missing", None);

        assert_eq!(params(&wire), [("Int", "-12"), ("Char", "x")]);
    }
}
