use std::io::Write;

use serde_json::{json, Value};
use wlanphy_modem::subcarrier::to_signed;
use wlanphy_modem::{OfdmSymbol, SymbolModel};

fn label(model: &SymbolModel, idx: usize) -> String {
    if idx < model.header_len() {
        "header".to_string()
    } else {
        format!("payload[{}]", idx - model.header_len())
    }
}

pub fn write_text<W: Write>(model: &SymbolModel, out: &mut W) -> std::io::Result<()> {
    writeln!(
        out,
        "# header {} / payload {}, {} symbols",
        model.header_scheme(),
        model.scheme(),
        model.len()
    )?;
    for (idx, symbol) in model.symbols().iter().enumerate() {
        writeln!(out, "{}:", label(model, idx))?;
        for (index, point) in symbol.occupied() {
            writeln!(out, "  {:>3} {:+.6} {:+.6}", to_signed(index), point.re, point.im)?;
        }
    }
    Ok(())
}

fn symbol_json(kind: &str, symbol: &OfdmSymbol) -> Value {
    let subcarriers: Vec<Value> = symbol
        .occupied()
        .map(|(index, point)| json!({ "index": to_signed(index), "i": point.re, "q": point.im }))
        .collect();
    json!({ "kind": kind, "subcarriers": subcarriers })
}

pub fn to_json(model: &SymbolModel) -> Value {
    let symbols: Vec<Value> = model
        .symbols()
        .iter()
        .enumerate()
        .map(|(idx, symbol)| {
            let kind = if idx < model.header_len() { "header" } else { "payload" };
            symbol_json(kind, symbol)
        })
        .collect();
    json!({
        "scheme": model.scheme().name(),
        "header_scheme": model.header_scheme().name(),
        "symbols": symbols,
    })
}
