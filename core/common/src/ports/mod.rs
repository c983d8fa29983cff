//! Ports: アプリと外界の境界になる trait 群

pub mod outbound;
