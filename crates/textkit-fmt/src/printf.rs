//! Printf-style template rendering over a typed argument slice.

/// A typed argument for [`format`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Arg<'a> {
    Int(i64),
    Uint(u64),
    Float(f64),
    Char(char),
    Str(&'a str),
    Ptr(usize),
}

impl Arg<'_> {
    fn as_i64(&self) -> i64 {
        match *self {
            Arg::Int(v) => v,
            Arg::Uint(v) => v as i64,
            Arg::Float(v) => v as i64,
            Arg::Char(c) => c as i64,
            Arg::Ptr(p) => p as i64,
            Arg::Str(_) => 0,
        }
    }

    fn as_u64(&self) -> u64 {
        match *self {
            Arg::Int(v) => v as u64,
            Arg::Uint(v) => v,
            Arg::Float(v) => v as u64,
            Arg::Char(c) => c as u64,
            Arg::Ptr(p) => p as u64,
            Arg::Str(_) => 0,
        }
    }

    fn as_f64(&self) -> f64 {
        match *self {
            Arg::Int(v) => v as f64,
            Arg::Uint(v) => v as f64,
            Arg::Float(v) => v,
            Arg::Char(c) => c as u32 as f64,
            Arg::Ptr(p) => p as f64,
            Arg::Str(_) => 0.0,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct Spec {
    minus: bool,
    plus: bool,
    space: bool,
    alt: bool,
    zero: bool,
    width: usize,
    precision: Option<usize>,
}

impl Spec {
    fn sign_for(&self, negative: bool) -> &'static str {
        if negative {
            "-"
        } else if self.plus {
            "+"
        } else if self.space {
            " "
        } else {
            ""
        }
    }

    /// Pad `prefix + body` out to the field width. Zero padding goes between
    /// prefix and body; space padding wraps the whole rendition.
    fn pad_numeric(&self, prefix: &str, body: &str) -> String {
        let len = prefix.len() + body.len();
        if len >= self.width {
            return format!("{prefix}{body}");
        }
        let fill = self.width - len;
        if self.zero && !self.minus {
            format!("{prefix}{}{body}", "0".repeat(fill))
        } else if self.minus {
            format!("{prefix}{body}{}", " ".repeat(fill))
        } else {
            format!("{}{prefix}{body}", " ".repeat(fill))
        }
    }

    fn pad_text(&self, text: &str) -> String {
        let len = text.chars().count();
        if len >= self.width {
            return text.to_string();
        }
        let fill = " ".repeat(self.width - len);
        if self.minus {
            format!("{text}{fill}")
        } else {
            format!("{fill}{text}")
        }
    }
}

/// Renders a printf-style template against `args`.
///
/// Supports the conversions d,i,u,o,x,X,f,F,e,E,g,G,a,A,c,s,p,%%, the flags
/// `-+ #0`, width and precision (including `*`), and the length modifiers
/// hh,h,l,ll,j,z,t,L (accepted and ignored; the argument carries its own
/// width). An empty template renders an empty string; a conversion with no
/// argument left renders nothing; malformed conversions are copied through
/// verbatim.
pub fn format(fmt: &str, args: &[Arg]) -> String {
    let bytes = fmt.as_bytes();
    let mut out = String::with_capacity(fmt.len());
    let mut next_arg = 0usize;
    let mut i = 0usize;

    while i < bytes.len() {
        if bytes[i] != b'%' {
            let start = i;
            while i < bytes.len() && bytes[i] != b'%' {
                i += 1;
            }
            out.push_str(&fmt[start..i]);
            continue;
        }

        let spec_start = i;
        i += 1;
        let mut spec = Spec::default();

        // flags
        while i < bytes.len() {
            match bytes[i] {
                b'-' => spec.minus = true,
                b'+' => spec.plus = true,
                b' ' => spec.space = true,
                b'#' => spec.alt = true,
                b'0' => spec.zero = true,
                _ => break,
            }
            i += 1;
        }

        // width
        if i < bytes.len() && bytes[i] == b'*' {
            i += 1;
            let w = take_arg(args, &mut next_arg).map_or(0, |a| a.as_i64());
            if w < 0 {
                spec.minus = true;
                spec.width = (-w) as usize;
            } else {
                spec.width = w as usize;
            }
        } else {
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                spec.width = spec.width.saturating_mul(10) + usize::from(bytes[i] - b'0');
                i += 1;
            }
        }

        // precision
        if i < bytes.len() && bytes[i] == b'.' {
            i += 1;
            if i < bytes.len() && bytes[i] == b'*' {
                i += 1;
                let p = take_arg(args, &mut next_arg).map_or(0, |a| a.as_i64());
                spec.precision = if p < 0 { None } else { Some(p as usize) };
            } else {
                let mut p = 0usize;
                while i < bytes.len() && bytes[i].is_ascii_digit() {
                    p = p.saturating_mul(10) + usize::from(bytes[i] - b'0');
                    i += 1;
                }
                spec.precision = Some(p);
            }
        }

        // length modifiers: parsed and discarded, Arg carries its own width
        while i < bytes.len() && matches!(bytes[i], b'h' | b'l' | b'j' | b'z' | b't' | b'L') {
            i += 1;
        }

        let Some(&conv) = bytes.get(i) else {
            // dangling specifier, copy it through
            out.push_str(&fmt[spec_start..]);
            break;
        };
        i += 1;

        match conv {
            b'%' => out.push('%'),
            b'd' | b'i' => {
                if let Some(arg) = take_arg(args, &mut next_arg) {
                    let v = arg.as_i64();
                    out.push_str(&render_int(&spec, v < 0, v.unsigned_abs().to_string()));
                }
            }
            b'u' => {
                if let Some(arg) = take_arg(args, &mut next_arg) {
                    out.push_str(&render_int(&spec, false, arg.as_u64().to_string()));
                }
            }
            b'o' => {
                if let Some(arg) = take_arg(args, &mut next_arg) {
                    let v = arg.as_u64();
                    let mut digits = format!("{v:o}");
                    if spec.alt && !digits.starts_with('0') {
                        digits.insert(0, '0');
                    }
                    out.push_str(&render_int(&spec, false, digits));
                }
            }
            b'x' | b'X' => {
                if let Some(arg) = take_arg(args, &mut next_arg) {
                    let v = arg.as_u64();
                    let digits = if conv == b'x' {
                        format!("{v:x}")
                    } else {
                        format!("{v:X}")
                    };
                    let prefix = if spec.alt && v != 0 {
                        if conv == b'x' {
                            "0x"
                        } else {
                            "0X"
                        }
                    } else {
                        ""
                    };
                    out.push_str(&render_prefixed_int(&spec, prefix, digits));
                }
            }
            b'f' | b'F' | b'e' | b'E' | b'g' | b'G' | b'a' | b'A' => {
                if let Some(arg) = take_arg(args, &mut next_arg) {
                    out.push_str(&render_float(&spec, conv, arg.as_f64()));
                }
            }
            b'c' => {
                if let Some(arg) = take_arg(args, &mut next_arg) {
                    let c = match arg {
                        Arg::Char(c) => Some(*c),
                        other => char::from_u32(other.as_u64() as u32),
                    };
                    if let Some(c) = c {
                        out.push_str(&spec.pad_text(&c.to_string()));
                    }
                }
            }
            b's' => {
                if let Some(arg) = take_arg(args, &mut next_arg) {
                    let s = match arg {
                        Arg::Str(s) => s,
                        _ => "",
                    };
                    let truncated: String = match spec.precision {
                        Some(p) => s.chars().take(p).collect(),
                        None => s.to_string(),
                    };
                    out.push_str(&spec.pad_text(&truncated));
                }
            }
            b'p' => {
                if let Some(arg) = take_arg(args, &mut next_arg) {
                    let body = format!("0x{:x}", arg.as_u64());
                    out.push_str(&spec.pad_text(&body));
                }
            }
            _ => {
                // unknown conversion, copy the raw specifier through
                out.push_str(&fmt[spec_start..i]);
            }
        }
    }

    out
}

fn take_arg<'a, 'b>(args: &'b [Arg<'a>], next: &mut usize) -> Option<&'b Arg<'a>> {
    let arg = args.get(*next)?;
    *next += 1;
    Some(arg)
}

fn render_int(spec: &Spec, negative: bool, digits: String) -> String {
    render_prefixed_int(spec, spec.sign_for(negative), digits)
}

fn render_prefixed_int(spec: &Spec, prefix: &str, mut digits: String) -> String {
    // an explicit precision turns off zero padding for integer conversions
    let mut spec = *spec;
    if let Some(p) = spec.precision {
        spec.zero = false;
        if p == 0 && digits == "0" {
            digits.clear();
        } else if digits.len() < p {
            digits = format!("{}{digits}", "0".repeat(p - digits.len()));
        }
    }
    spec.pad_numeric(prefix, &digits)
}

fn render_float(spec: &Spec, conv: u8, value: f64) -> String {
    let upper = conv.is_ascii_uppercase();
    let negative = value.is_sign_negative();
    let prefix = spec.sign_for(negative);

    if value.is_nan() {
        let body = if upper { "NAN" } else { "nan" };
        // NaN sign is not meaningful; print unsigned like glibc does for quiet NaN
        return spec.pad_text(&format!("{}{body}", if spec.plus { "+" } else { "" }));
    }
    if value.is_infinite() {
        let body = if upper { "INF" } else { "inf" };
        return spec.pad_text(&format!("{prefix}{body}"));
    }

    let magnitude = value.abs();
    let body = match conv.to_ascii_lowercase() {
        b'f' => render_fixed(spec, magnitude),
        b'e' => render_scientific(magnitude, spec.precision.unwrap_or(6), upper),
        b'g' => render_general(spec, magnitude, upper),
        _ => render_hex_float(magnitude, spec.precision, upper),
    };
    spec.pad_numeric(prefix, &body)
}

fn render_fixed(spec: &Spec, magnitude: f64) -> String {
    let precision = spec.precision.unwrap_or(6);
    let mut body = format!("{magnitude:.precision$}");
    if precision == 0 && spec.alt {
        body.push('.');
    }
    body
}

/// `%e` rendition of a non-negative finite value: `d.dddde±XX`.
fn render_scientific(magnitude: f64, precision: usize, upper: bool) -> String {
    let raw = format!("{magnitude:.precision$e}");
    let (mantissa, exp) = match raw.split_once('e') {
        Some((m, e)) => (m.to_string(), e.parse::<i32>().unwrap_or(0)),
        None => (raw, 0),
    };
    let e = if upper { 'E' } else { 'e' };
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{mantissa}{e}{sign}{:02}", exp.abs())
}

/// `%g` rendition: fixed or scientific depending on the decimal exponent,
/// with trailing zeros trimmed unless the `#` flag is set.
fn render_general(spec: &Spec, magnitude: f64, upper: bool) -> String {
    let p = match spec.precision {
        Some(0) => 1,
        Some(p) => p,
        None => 6,
    };
    // decimal exponent as %e with p-1 digits would produce it
    let probe_precision = p - 1;
    let probe = format!("{magnitude:.probe_precision$e}");
    let exp = probe
        .split_once('e')
        .and_then(|(_, e)| e.parse::<i32>().ok())
        .unwrap_or(0);

    let mut body = if exp < -4 || exp >= p as i32 {
        render_scientific(magnitude, p - 1, upper)
    } else {
        let decimals = (p as i32 - 1 - exp).max(0) as usize;
        format!("{magnitude:.decimals$}")
    };

    if !spec.alt {
        body = trim_float_zeros(body);
    }
    body
}

fn trim_float_zeros(body: String) -> String {
    let (mantissa, exponent) = match body.split_once(['e', 'E']) {
        Some((m, e)) => (m, Some((body.as_bytes()[m.len()] as char, e.to_string()))),
        None => (body.as_str(), None),
    };
    let trimmed = if mantissa.contains('.') {
        mantissa.trim_end_matches('0').trim_end_matches('.')
    } else {
        mantissa
    };
    match exponent {
        Some((e, exp)) => format!("{trimmed}{e}{exp}"),
        None => trimmed.to_string(),
    }
}

/// `%a` rendition of a non-negative finite value: `0x1.<nibbles>p±e`.
fn render_hex_float(magnitude: f64, precision: Option<usize>, upper: bool) -> String {
    let bits = magnitude.to_bits();
    let raw_exp = ((bits >> 52) & 0x7FF) as i64;
    let mantissa = bits & 0x000F_FFFF_FFFF_FFFF;

    let (mut lead, mut mant, exp) = if raw_exp == 0 {
        if mantissa == 0 {
            (0u64, 0u64, 0i64)
        } else {
            (0, mantissa, -1022)
        }
    } else {
        (1, mantissa, raw_exp - 1023)
    };

    if let Some(p) = precision {
        if p < 13 {
            // round the mantissa to p nibbles, ties away from zero
            let shift = 4 * (13 - p);
            let half = 1u64 << (shift - 1);
            let rounded = mant + half;
            if rounded < mant || rounded >> 52 > 0 {
                lead += rounded >> 52;
            }
            mant = (rounded >> shift) << shift;
            mant &= 0x000F_FFFF_FFFF_FFFF;
        }
    }

    let mut nibbles = format!("{mant:013x}");
    match precision {
        Some(p) => nibbles.truncate(p),
        None => nibbles = nibbles.trim_end_matches('0').to_string(),
    }

    let body = if nibbles.is_empty() {
        format!("0x{lead}p{}{}", if exp < 0 { '-' } else { '+' }, exp.abs())
    } else {
        format!(
            "0x{lead}.{nibbles}p{}{}",
            if exp < 0 { '-' } else { '+' },
            exp.abs()
        )
    };
    if upper {
        body.to_uppercase()
    } else {
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passthrough() {
        assert_eq!(format("hello world", &[]), "hello world");
        assert_eq!(format("", &[Arg::Int(1)]), "");
    }

    #[test]
    fn test_integers() {
        assert_eq!(format("%d", &[Arg::Int(392)]), "392");
        assert_eq!(format("%i", &[Arg::Int(-7)]), "-7");
        assert_eq!(format("%u", &[Arg::Uint(7235)]), "7235");
        assert_eq!(format("%5d", &[Arg::Int(42)]), "   42");
        assert_eq!(format("%-5d|", &[Arg::Int(42)]), "42   |");
        assert_eq!(format("%05d", &[Arg::Int(42)]), "00042");
        assert_eq!(format("%05d", &[Arg::Int(-42)]), "-0042");
        assert_eq!(format("%+d", &[Arg::Int(42)]), "+42");
        assert_eq!(format("% d", &[Arg::Int(42)]), " 42");
    }

    #[test]
    fn test_integer_precision() {
        assert_eq!(format("%.5d", &[Arg::Int(42)]), "00042");
        assert_eq!(format("%.0d", &[Arg::Int(0)]), "");
        // precision disables zero padding
        assert_eq!(format("%08.5d", &[Arg::Int(42)]), "   00042");
    }

    #[test]
    fn test_bases() {
        assert_eq!(format("%o", &[Arg::Uint(8)]), "10");
        assert_eq!(format("%#o", &[Arg::Uint(8)]), "010");
        assert_eq!(format("%x", &[Arg::Uint(2042)]), "7fa");
        assert_eq!(format("%X", &[Arg::Uint(2042)]), "7FA");
        assert_eq!(format("%#x", &[Arg::Uint(2042)]), "0x7fa");
        assert_eq!(format("%#X", &[Arg::Uint(2042)]), "0X7FA");
        assert_eq!(format("%#x", &[Arg::Uint(0)]), "0");
    }

    #[test]
    fn test_floats_fixed() {
        assert_eq!(format("%f", &[Arg::Float(392.65)]), "392.650000");
        assert_eq!(format("%.2f", &[Arg::Float(392.65)]), "392.65");
        assert_eq!(format("%.0f", &[Arg::Float(2.5)]), "2");
        assert_eq!(format("%8.2f", &[Arg::Float(3.5)]), "    3.50");
        assert_eq!(format("%08.2f", &[Arg::Float(-3.5)]), "-0003.50");
    }

    #[test]
    fn test_floats_scientific() {
        assert_eq!(format("%e", &[Arg::Float(392.65)]), "3.926500e+02");
        assert_eq!(format("%E", &[Arg::Float(392.65)]), "3.926500E+02");
        assert_eq!(format("%.2e", &[Arg::Float(0.00123)]), "1.23e-03");
        assert_eq!(format("%.0e", &[Arg::Float(1000.0)]), "1e+03");
    }

    #[test]
    fn test_floats_general() {
        assert_eq!(format("%g", &[Arg::Float(392.65)]), "392.65");
        assert_eq!(format("%g", &[Arg::Float(0.0000125)]), "1.25e-05");
        assert_eq!(format("%g", &[Arg::Float(1000000.0)]), "1e+06");
        assert_eq!(format("%G", &[Arg::Float(0.0000125)]), "1.25E-05");
        assert_eq!(format("%g", &[Arg::Float(100.0)]), "100");
    }

    #[test]
    fn test_floats_hex() {
        assert_eq!(format("%a", &[Arg::Float(1.0)]), "0x1p+0");
        assert_eq!(format("%a", &[Arg::Float(2.0)]), "0x1p+1");
        assert_eq!(format("%a", &[Arg::Float(0.0)]), "0x0p+0");
        assert_eq!(format("%a", &[Arg::Float(1.5)]), "0x1.8p+0");
        assert_eq!(format("%A", &[Arg::Float(1.5)]), "0X1.8P+0");
    }

    #[test]
    fn test_float_specials() {
        assert_eq!(format("%f", &[Arg::Float(f64::NAN)]), "nan");
        assert_eq!(format("%F", &[Arg::Float(f64::NAN)]), "NAN");
        assert_eq!(format("%f", &[Arg::Float(f64::INFINITY)]), "inf");
        assert_eq!(format("%f", &[Arg::Float(f64::NEG_INFINITY)]), "-inf");
    }

    #[test]
    fn test_char_and_str() {
        assert_eq!(format("%c", &[Arg::Char('a')]), "a");
        assert_eq!(format("%c", &[Arg::Int(98)]), "b");
        assert_eq!(format("%s", &[Arg::Str("sample")]), "sample");
        assert_eq!(format("%10s", &[Arg::Str("hi")]), "        hi");
        assert_eq!(format("%-10s|", &[Arg::Str("hi")]), "hi        |");
        assert_eq!(format("%.3s", &[Arg::Str("sample")]), "sam");
    }

    #[test]
    fn test_pointer() {
        assert_eq!(format("%p", &[Arg::Ptr(0xb8000000)]), "0xb8000000");
    }

    #[test]
    fn test_percent_literal() {
        assert_eq!(format("100%%", &[]), "100%");
        assert_eq!(format("%d%%", &[Arg::Int(50)]), "50%");
    }

    #[test]
    fn test_star_width_and_precision() {
        assert_eq!(format("%*d", &[Arg::Int(5), Arg::Int(42)]), "   42");
        assert_eq!(format("%.*f", &[Arg::Int(2), Arg::Float(3.14159)]), "3.14");
        // negative star width left-aligns
        assert_eq!(format("%*d|", &[Arg::Int(-5), Arg::Int(42)]), "42   |");
    }

    #[test]
    fn test_length_modifiers_accepted() {
        assert_eq!(format("%lld", &[Arg::Int(1)]), "1");
        assert_eq!(format("%zu", &[Arg::Uint(2)]), "2");
        assert_eq!(format("%hhd", &[Arg::Int(3)]), "3");
        assert_eq!(format("%Lf", &[Arg::Float(1.5)]), "1.500000");
    }

    #[test]
    fn test_graceful_degradation() {
        // conversion with no argument left renders nothing
        assert_eq!(format("a%db", &[]), "ab");
        // dangling specifier copies through
        assert_eq!(format("50%", &[]), "50%");
        // unknown conversion copies through
        assert_eq!(format("%q", &[]), "%q");
        // extra arguments are ignored
        assert_eq!(format("%d", &[Arg::Int(1), Arg::Int(2)]), "1");
    }
}
