//! HTTP interface layer. Handlers translate requests into domain calls and
//! never hold state of their own.

pub mod rest;
