//! DSI - the line protocol the presentation shell speaks

pub mod command;
pub mod protocol;
