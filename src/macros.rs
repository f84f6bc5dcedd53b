// src/macros.rs

/// String shorthand: `s!()` → empty, `s!(x)` → `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Owned string map literal: `map! { "Age" => "37", "Occupation" => "Scientist" }`.
#[macro_export]
macro_rules! map {
    () => {
        ::std::collections::BTreeMap::<::std::string::String, ::std::string::String>::new()
    };
    ($($k:expr => $v:expr),+ $(,)?) => {{
        let mut m = ::std::collections::BTreeMap::<::std::string::String, ::std::string::String>::new();
        $(
            m.insert(::std::string::String::from($k), ::std::string::String::from($v));
        )+
        m
    }};
}
