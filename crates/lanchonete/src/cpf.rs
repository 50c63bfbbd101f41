//! CPF (Brazilian taxpayer id) validation.
//!
//! A CPF has nine base digits followed by two check digits, each computed
//! with a modulo-11 weighted sum. Formatting characters are ignored;
//! strings where all eleven digits repeat are rejected outright.

/// Strips everything but ASCII digits.
pub fn normalize(cpf: &str) -> String {
    cpf.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Returns true if `cpf` is a structurally valid CPF.
pub fn is_cpf_valid(cpf: &str) -> bool {
    let digits = normalize(cpf);

    if digits.len() != 11 {
        return false;
    }

    let d: Vec<u32> = digits.chars().filter_map(|c| c.to_digit(10)).collect();

    // All-repeated CPFs pass the checksum but are not issued.
    if d.iter().all(|&x| x == d[0]) {
        return false;
    }

    let check = |len: usize| -> u32 {
        let sum: u32 = d[..len]
            .iter()
            .enumerate()
            .map(|(i, &x)| x * (len as u32 + 1 - i as u32))
            .sum();
        let rest = sum % 11;
        if rest < 2 {
            0
        } else {
            11 - rest
        }
    };

    d[9] == check(9) && d[10] == check(10)
}
