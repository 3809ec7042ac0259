use crate::core::{Industry, CURRENCY_CODES};

pub fn render_benchmarks() -> String {
    let mut output = String::new();

    output.push_str("Industry benchmarks (average ROAS)\n");
    output.push_str("──────────────────────────────────\n");
    for industry in Industry::ALL {
        output.push_str(&format!(
            "{:<12} {:<22} {:>4.1}\n",
            industry.key(),
            industry.display_name(),
            industry.benchmark_roas()
        ));
    }

    output
}

pub fn render_currencies() -> String {
    CURRENCY_CODES
        .iter()
        .map(|(code, symbol)| format!("{code}  {symbol}\n"))
        .collect()
}
