//! Documented meanings of OpenFIGI error status codes.

/// Human-readable reason for a non-success status, as documented by the API.
pub const fn explain_status(status: u16) -> &'static str {
    match status {
        400 => {
            "Bad Request: invalid payload (mapping body not an array, \
             search/filter body not a plain object, or bad values key)"
        }
        401 => "Unauthorized: invalid API key",
        404 => "Invalid URL",
        405 => "Invalid HTTP method",
        406 => "Unsupported 'Accept' type",
        413 => {
            "Payload too large: mapping request has too many jobs \
             (more than 10 without an API key, more than 100 with one)"
        }
        415 => "Invalid 'Content-Type' header",
        429 => {
            "Rate limit exceeded: see X-RateLimit-Limit, X-RateLimit-Remaining \
             and X-RateLimit-Reset headers"
        }
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unexpected response status",
    }
}
