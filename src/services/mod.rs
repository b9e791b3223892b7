pub mod checkin_service;
pub mod roster_service;
