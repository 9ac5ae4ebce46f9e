#![allow(dead_code)]

pub mod text_server;
