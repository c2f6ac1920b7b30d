//! Built-in library function signatures
//!
//! The SysY runtime library is a fixed external input: its signatures are
//! pre-declared into the global scope before any user code is processed.
//! The table below reproduces the library's declared shapes as-is.

use std::collections::HashMap;

use super::entry::{Entry, SyType};

fn int_array_param() -> Entry {
    Entry::array("", SyType::Int, Vec::new(), false, None)
}

fn float_array_param() -> Entry {
    Entry::array("", SyType::Float, Vec::new(), false, None)
}

lazy_static::lazy_static! {
    /// Name-to-entry table of the built-in library routines
    pub static ref BUILTIN_ENTRIES: HashMap<&'static str, Entry> = {
        let mut table = HashMap::new();
        table.insert("getint", Entry::function("getint", SyType::Int, vec![]));
        table.insert("getch", Entry::function("getch", SyType::Int, vec![]));
        table.insert(
            "getfloat",
            Entry::function("getfloat", SyType::Float, vec![]),
        );
        table.insert(
            "getarray",
            Entry::function("getarray", SyType::Int, vec![int_array_param()]),
        );
        table.insert(
            "getfarray",
            Entry::function("getfarray", SyType::Float, vec![float_array_param()]),
        );
        table.insert(
            "putint",
            Entry::function("putint", SyType::Void, vec![int_array_param()]),
        );
        table.insert(
            "putch",
            Entry::function("putch", SyType::Void, vec![int_array_param()]),
        );
        table.insert(
            "putfloat",
            Entry::function("putfloat", SyType::Void, vec![float_array_param()]),
        );
        table.insert(
            "putarray",
            Entry::function(
                "putarray",
                SyType::Void,
                vec![Entry::variable("", SyType::Int), int_array_param()],
            ),
        );
        table.insert(
            "putfarray",
            Entry::function(
                "putfarray",
                SyType::Void,
                vec![Entry::variable("", SyType::Int), float_array_param()],
            ),
        );
        table.insert("putf", Entry::function("putf", SyType::Void, vec![]));
        table.insert(
            "starttime",
            Entry::function("starttime", SyType::Void, vec![]),
        );
        table.insert(
            "stoptime",
            Entry::function("stoptime", SyType::Void, vec![]),
        );
        table
    };
}
