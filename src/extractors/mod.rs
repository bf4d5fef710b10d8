mod db;

pub use db::DbConn;
