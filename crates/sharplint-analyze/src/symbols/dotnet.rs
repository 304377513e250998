//! Builtin .NET type stubs
//!
//! A partial surface of the BCL types that matter for async-overload
//! analysis: types whose members come in sync/async pairs, plus the task
//! types themselves. Only member names are modeled.

use super::type_info::{MemberInfo, TypeInfo};
use super::SymbolTable;

struct BuiltinType {
    name: &'static str,
    base: Option<&'static str>,
    methods: &'static [&'static str],
    static_methods: &'static [&'static str],
}

const BUILTIN_TYPES: &[BuiltinType] = &[
    BuiltinType {
        name: "Task",
        base: None,
        methods: &["Wait", "ContinueWith", "GetAwaiter", "ConfigureAwait", "Dispose"],
        static_methods: &["Run", "Delay", "WhenAll", "WhenAny", "FromResult", "CompletedTask"],
    },
    BuiltinType {
        name: "ValueTask",
        base: None,
        methods: &["AsTask", "GetAwaiter", "ConfigureAwait", "Preserve"],
        static_methods: &[],
    },
    BuiltinType {
        name: "Stream",
        base: None,
        methods: &[
            "Read", "ReadAsync", "Write", "WriteAsync", "Flush", "FlushAsync",
            "CopyTo", "CopyToAsync", "Seek", "SetLength", "Close", "Dispose",
            "DisposeAsync",
        ],
        static_methods: &[],
    },
    BuiltinType {
        name: "FileStream",
        base: Some("Stream"),
        methods: &["Lock", "Unlock"],
        static_methods: &[],
    },
    BuiltinType {
        name: "MemoryStream",
        base: Some("Stream"),
        methods: &["ToArray", "GetBuffer", "WriteTo"],
        static_methods: &[],
    },
    BuiltinType {
        name: "TextReader",
        base: None,
        methods: &[
            "Read", "ReadAsync", "ReadLine", "ReadLineAsync", "ReadToEnd",
            "ReadToEndAsync", "ReadBlock", "ReadBlockAsync", "Peek", "Close",
            "Dispose",
        ],
        static_methods: &[],
    },
    BuiltinType {
        name: "StreamReader",
        base: Some("TextReader"),
        methods: &["DiscardBufferedData"],
        static_methods: &[],
    },
    BuiltinType {
        name: "StringReader",
        base: Some("TextReader"),
        methods: &[],
        static_methods: &[],
    },
    BuiltinType {
        name: "TextWriter",
        base: None,
        methods: &[
            "Write", "WriteAsync", "WriteLine", "WriteLineAsync", "Flush",
            "FlushAsync", "Close", "Dispose", "DisposeAsync",
        ],
        static_methods: &[],
    },
    BuiltinType {
        name: "StreamWriter",
        base: Some("TextWriter"),
        methods: &[],
        static_methods: &[],
    },
    BuiltinType {
        name: "StringWriter",
        base: Some("TextWriter"),
        methods: &["GetStringBuilder", "ToString"],
        static_methods: &[],
    },
    BuiltinType {
        name: "File",
        base: None,
        methods: &[],
        static_methods: &[
            "ReadAllText", "ReadAllTextAsync", "ReadAllLines", "ReadAllLinesAsync",
            "ReadAllBytes", "ReadAllBytesAsync", "WriteAllText", "WriteAllTextAsync",
            "WriteAllLines", "WriteAllLinesAsync", "WriteAllBytes", "WriteAllBytesAsync",
            "AppendAllText", "AppendAllTextAsync", "AppendAllLines", "AppendAllLinesAsync",
            "OpenRead", "OpenWrite", "OpenText", "Open", "Create", "CreateText",
            "Exists", "Delete", "Copy", "Move",
        ],
    },
    BuiltinType {
        name: "HttpClient",
        base: None,
        methods: &[
            "Send", "SendAsync", "GetAsync", "PostAsync", "PutAsync", "DeleteAsync",
            "GetStringAsync", "GetByteArrayAsync", "GetStreamAsync", "Dispose",
        ],
        static_methods: &[],
    },
    BuiltinType {
        name: "HttpContent",
        base: None,
        methods: &[
            "ReadAsStringAsync", "ReadAsByteArrayAsync", "ReadAsStreamAsync",
            "CopyTo", "CopyToAsync", "Dispose",
        ],
        static_methods: &[],
    },
    BuiltinType {
        name: "Console",
        base: None,
        methods: &[],
        static_methods: &["Write", "WriteLine", "Read", "ReadLine", "ReadKey"],
    },
    BuiltinType {
        name: "DbConnection",
        base: None,
        methods: &[
            "Open", "OpenAsync", "Close", "CloseAsync", "BeginTransaction",
            "BeginTransactionAsync", "CreateCommand", "Dispose", "DisposeAsync",
        ],
        static_methods: &[],
    },
    BuiltinType {
        name: "DbCommand",
        base: None,
        methods: &[
            "ExecuteNonQuery", "ExecuteNonQueryAsync", "ExecuteReader",
            "ExecuteReaderAsync", "ExecuteScalar", "ExecuteScalarAsync",
            "Prepare", "PrepareAsync", "Dispose", "DisposeAsync",
        ],
        static_methods: &[],
    },
    BuiltinType {
        name: "DbDataReader",
        base: None,
        methods: &[
            "Read", "ReadAsync", "NextResult", "NextResultAsync", "Close",
            "CloseAsync", "Dispose", "DisposeAsync",
        ],
        static_methods: &[],
    },
];

/// Register the builtin .NET type stubs into a symbol table
pub(crate) fn register_builtins(table: &mut SymbolTable) {
    for builtin in BUILTIN_TYPES {
        let mut info = TypeInfo::new(builtin.name);
        if let Some(base) = builtin.base {
            info.bases.push(base.to_string());
        }
        for method in builtin.methods {
            info.add_member(MemberInfo::method(*method));
        }
        for method in builtin.static_methods {
            info.add_member(MemberInfo::method(*method).with_static(true));
        }
        table.register_type(info);
    }
}
