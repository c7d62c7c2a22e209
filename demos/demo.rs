// demos/demo.rs
use chrono::NaiveDate;
use gbm_forecast::analytics::gbm_analytic;
use gbm_forecast::forecast::forecast_engine::{ForecastConfig, ForecastEngine};
use gbm_forecast::fundamentals;
use gbm_forecast::input::ForecastRequest;
use gbm_forecast::math_utils::Timer;
use gbm_forecast::output;
use gbm_forecast::rng::RngFactory;

fn main() {
    println!("Running gbm-forecast Demo\n");

    let start = NaiveDate::from_ymd_opt(2024, 6, 13).expect("Valid date");
    let engine = ForecastEngine::new(ForecastConfig::default()).expect("Valid configuration");
    let factory = RngFactory::new(12345);

    let requests = [
        ForecastRequest::default(),
        ForecastRequest {
            ticker: "aapl".to_string(),
            initial_price: 189.50,
            annual_return_pct: 12.0,
            annual_volatility_pct: 25.0,
        },
        ForecastRequest {
            ticker: "penny".to_string(),
            initial_price: 1.50,
            annual_return_pct: -40.0,
            annual_volatility_pct: 250.0,
        },
    ];

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for (run_id, request) in requests.iter().enumerate() {
        let (ticker, params) = request.validate().expect("Valid request");
        let mut generator = factory.generator(run_id as u64);

        let mut timer = Timer::new();
        timer.start();
        let path = engine.generate(&params, &ticker, start, &mut generator);
        let elapsed = timer.elapsed_ms();

        let bands = gbm_analytic::daily_confidence_bands(
            params.initial_price,
            params.annual_drift,
            params.annual_volatility,
            engine.config().dt(),
            path.len(),
            0.9,
        )
        .expect("Valid band level");

        println!("{:=<80}", "");
        output::render_fundamentals(&mut out, &fundamentals::lookup(&ticker)).expect("stdout");
        println!();
        output::render_forecast_table(&mut out, &path, Some(bands.as_slice())).expect("stdout");
        println!(
            "\nFinal price: {}  |  days on floor: {}  |  simulated in {:.3} ms\n",
            output::format_currency(path.final_price().unwrap_or(params.initial_price)),
            path.floored_days(engine.config().price_floor),
            elapsed
        );
    }
}
