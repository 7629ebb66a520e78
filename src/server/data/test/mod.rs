mod action_log;
mod appeal;
mod loa;
mod staff;
mod stats;
mod user;
mod wallet;
