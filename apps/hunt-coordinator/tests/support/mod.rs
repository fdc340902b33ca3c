#![allow(dead_code)]

pub mod sessions;
