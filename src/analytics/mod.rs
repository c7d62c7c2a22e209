pub mod gbm_analytic;
