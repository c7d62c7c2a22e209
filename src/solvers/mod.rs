pub mod price_step;
