pub mod common;

pub mod a001_course;
pub mod a002_ebook;
pub mod a003_enrollment;
pub mod a004_freelancer;
pub mod a005_job;
pub mod a006_logistics_order;
pub mod a007_manufacturer;
pub mod a008_news_post;
pub mod a009_online_course;
pub mod a010_sales_order;
pub mod a011_purchase_order;
pub mod a012_rental;
pub mod a013_return;
pub mod a014_student;
pub mod a015_supplier;
