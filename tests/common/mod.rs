#![allow(dead_code)]

use awaitlint::{CallableDeclaration, CallableKind, InterfaceDescriptor, TypeDescriptor};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn method(name: &str) -> CallableDeclaration {
    CallableDeclaration::new(name, CallableKind::Method)
}

pub fn property(name: &str) -> CallableDeclaration {
    CallableDeclaration::new(name, CallableKind::Property)
}

/// A task-like return type exposing its own awaiter member
pub fn task_type() -> TypeDescriptor {
    TypeDescriptor::new("Task").with_member("GetAwaiter")
}

/// A return type with members but no awaiter
pub fn plain_type() -> TypeDescriptor {
    TypeDescriptor::new("String").with_member("Length")
}

/// A custom type awaitable only through an implemented interface
pub fn interface_awaitable_type() -> TypeDescriptor {
    TypeDescriptor::new("MyFuture")
        .with_interface(InterfaceDescriptor::new("IAwaitable").with_member("GetAwaiter"))
}

/// The asynchronous-sequence marker type
pub fn async_stream_type() -> TypeDescriptor {
    TypeDescriptor::new("IAsyncEnumerable")
}
