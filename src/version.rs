//! API versions. Each version is mounted under `/v{major}`.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    V1,
    V2,
}

impl ApiVersion {
    pub const ALL: [ApiVersion; 2] = [ApiVersion::V1, ApiVersion::V2];

    pub const fn major(self) -> u32 {
        match self {
            ApiVersion::V1 => 1,
            ApiVersion::V2 => 2,
        }
    }

    pub fn prefix(self) -> String {
        format!("/v{}", self.major())
    }

    /// Payload of `GET /` for this version. The only behavior that differs between versions.
    pub const fn root_message(self) -> &'static str {
        match self {
            ApiVersion::V1 => "Items app",
            ApiVersion::V2 => "Items app2",
        }
    }
}
