//! Мелкие хелперы: простые числа для auto-sizing и разбор ENV.

use log::warn;
use std::str::FromStr;

pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut i = 2u64;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Наименьшее простое >= n.
pub fn next_prime(mut n: u64) -> u64 {
    while !is_prime(n) {
        n += 1;
    }
    n
}

/// Прочитать и распарсить переменную окружения.
/// Отсутствует -> None; не парсится -> None + warn.
pub fn env_parse<T: FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("ignoring {}={:?}: cannot parse", name, raw);
            None
        }
    }
}
