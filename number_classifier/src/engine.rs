//! Arithmetic properties of a single number.

use serde::Serialize;

const ARMSTRONG: &str = "armstrong";
const EVEN: &str = "even";
const ODD: &str = "odd";

/// A parsed input, decided once: either an exact integer in `i64` range or
/// anything else a float can hold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedNumber {
    Integer(i64),
    Real(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub number: f64,
    pub is_prime: bool,
    pub is_perfect: bool,
    pub properties: Vec<&'static str>,
    pub digit_sum: Option<u32>,
    pub fun_fact: String,
}

pub fn classify(number: f64, parsed: ParsedNumber) -> Classification {
    match parsed {
        ParsedNumber::Integer(n) => Classification {
            number,
            is_prime: is_prime(n),
            is_perfect: is_perfect(n),
            properties: classify_properties(n),
            digit_sum: Some(digit_sum(n)),
            fun_fact: get_fun_fact(n),
        },
        ParsedNumber::Real(value) => Classification {
            number,
            is_prime: false,
            is_perfect: false,
            properties: Vec::new(),
            digit_sum: None,
            fun_fact: format!(
                "{} is a real number with unique properties.",
                format_real(value)
            ),
        },
    }
}

/// Shortest round-trip text for a float, switching to exponent form when the
/// decimal exponent is below -4 or at least 16 (`1e-05`, `1.5e-07`, `1e+16`).
pub fn format_real(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }

    // `{:e}` gives the shortest digits, e.g. "-1.2345e-3".
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return value.to_string(),
    };
    let exponent: i32 = match exponent.parse() {
        Ok(exponent) => exponent,
        Err(_) => return value.to_string(),
    };
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let sign = if value.is_sign_negative() { "-" } else { "" };

    if !(-4..16).contains(&exponent) {
        let (lead, rest) = digits.split_at(1);
        let fraction = if rest.is_empty() {
            String::new()
        } else {
            format!(".{}", rest)
        };
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        return format!(
            "{}{}{}e{}{:02}",
            sign,
            lead,
            fraction,
            exp_sign,
            exponent.unsigned_abs()
        );
    }

    if exponent < 0 {
        let zeros = "0".repeat((-exponent - 1) as usize);
        return format!("{}0.{}{}", sign, zeros, digits);
    }

    let point = exponent as usize + 1;
    if digits.len() > point {
        let (whole, fraction) = digits.split_at(point);
        format!("{}{}.{}", sign, whole, fraction)
    } else {
        let padding = "0".repeat(point - digits.len());
        format!("{}{}{}.0", sign, digits, padding)
    }
}

/// Largest candidate divisor worth testing.
///
/// Goes through `f64`, so it can be off by one near perfect squares once `n`
/// is past 2^53.
fn sqrt_bound(n: i64) -> i64 {
    (n as f64).sqrt() as i64
}

pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    (2..=sqrt_bound(n)).all(|i| n % i != 0)
}

pub fn is_perfect(n: i64) -> bool {
    if n < 2 {
        return false;
    }

    let mut sum: i128 = 1;
    for i in 2..=sqrt_bound(n) {
        if n % i == 0 {
            let pair = n / i;
            sum += i as i128;
            if i != pair {
                sum += pair as i128;
            }
        }
    }

    sum == n as i128
}

/// Decimal digits of `|n|`, most significant first.
fn digits(n: i64) -> Vec<u32> {
    n.unsigned_abs()
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect()
}

pub fn is_armstrong(n: i64) -> bool {
    let digits = digits(n);
    let length = digits.len() as u32;
    let sum: u128 = digits.iter().map(|&d| (d as u128).pow(length)).sum();

    sum == n.unsigned_abs() as u128
}

pub fn digit_sum(n: i64) -> u32 {
    digits(n).iter().sum()
}

/// `armstrong` when it applies, then exactly one parity tag.
pub fn classify_properties(n: i64) -> Vec<&'static str> {
    let mut properties = Vec::with_capacity(2);
    if is_armstrong(n) {
        properties.push(ARMSTRONG);
    }
    if n % 2 == 0 {
        properties.push(EVEN);
    } else {
        properties.push(ODD);
    }
    properties
}

pub fn get_fun_fact(n: i64) -> String {
    if !is_armstrong(n) {
        return format!("{} is a fascinating number with unique properties.", n);
    }

    let digits = digits(n);
    let terms = digits
        .iter()
        .map(|d| format!("{}^{}", d, digits.len()))
        .collect::<Vec<String>>()
        .join(" + ");

    format!("{} is an Armstrong number because {} = {}", n, terms, n)
}
