use percent_encoding::AsciiSet;

/// Everything but the RFC 3986 unreserved set gets encoded.
static ENCODE_SET: &AsciiSet = &percent_encoding::NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

pub(crate) fn percent_encode_into(src: &str, dst: &mut String) {
    for chunk in percent_encoding::utf8_percent_encode(src, ENCODE_SET) {
        dst.push_str(chunk);
    }
}

fn len_needed<'a, I>(params: I) -> usize
where
    I: Iterator<Item = (&'a str, &'a str)>,
{
    // assumes nothing needs encoding, which is true for most action/version/name params.
    // trailing 2 is the '=' and '&' separators.
    params.map(|(name, value)| name.len() + value.len() + 2).sum()
}

/// Encodes parameters as `name=value` pairs joined by `&`, in iteration order.
pub(crate) fn encode_params<'a, I>(params: I) -> String
where
    I: Iterator<Item = (&'a str, &'a str)> + Clone,
{
    let mut dst = String::with_capacity(len_needed(params.clone()));

    for (name, value) in params {
        if !dst.is_empty() {
            dst.push('&');
        }

        percent_encode_into(name, &mut dst);
        dst.push('=');
        percent_encode_into(value, &mut dst);
    }

    dst
}
