lazy_static! {
    /// CHAR = <any US-ASCII character (octets 0 - 127)>
    static ref CHAR: [bool; 256] = {
        let mut bytes = [false; 256];

        for i in 0..128 {
            bytes[i] = true;
        }

        bytes
    };

    /// CTL = <any US-ASCII control character
    ///         (octets 0 - 31) and DEL (127)>
    static ref CTL: [bool; 256] = {
        let mut bytes = [false; 256];

        for i in 0..32 {
            bytes[i] = true;
        }

        bytes[127] = true;
        bytes
    };

    /// separators = "(" | ")" | "<" | ">" | "@"
    ///               | "," | ";" | ":" | "\" | <">
    ///               | "/" | "[" | "]" | "?" | "="
    ///               | "{" | "}" | SP | HT
    static ref SEPARATOR: [bool; 256] = {
        let mut result = [false; 256];
        let separators = "()<>@,;:\\\"/[]?={} \t";

        for s in separators.chars() {
            result[s as usize] = true;
        }

        result
    };

    /// token = 1*<any CHAR except CTLs or separators>
    static ref TOKEN_CHAR: [bool; 256] = {
        let mut result = [false; 256];

        for i in 0..256 {
            result[i] = CHAR[i] && !(CTL[i] || SEPARATOR[i]);
        }

        result
    };
}

#[inline]
pub fn is_token_char(byte: u8) -> bool {
    TOKEN_CHAR[byte as usize]
}

#[inline]
pub fn is_token(bytes: &[u8]) -> bool {
    if bytes.is_empty() {
        return false;
    }

    for byte in bytes {
        if !is_token_char(*byte) {
            return false;
        }
    }

    true
}

#[inline]
pub fn is_horizontal_tab(byte: u8) -> bool {
    byte == 9
}

/// field-value = *( field-content / obs-fold ), no CTLs apart from HTAB
#[inline]
pub fn is_field_value(bytes: &[u8]) -> bool {
    for byte in bytes {
        let b = *byte;
        if CTL[b as usize] && !is_horizontal_tab(b) {
            return false;
        }
    }

    true
}
