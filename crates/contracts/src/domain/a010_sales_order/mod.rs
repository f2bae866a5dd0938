//! Wholesale and retail orders
//!
//! Both channels share one schema; `channel` tells them apart.

include!(concat!(env!("OUT_DIR"), "/a010_sales_order_metadata.rs"));
