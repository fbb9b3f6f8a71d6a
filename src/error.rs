use std::fmt::Debug;

#[derive(Debug)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        payload_error(err)
    }
}

pub fn storage_read_error<T: Debug>(_: T) -> Error {
    Error {
        code: 1,
        message: "storage read failed".into(),
    }
}

pub fn storage_write_error<T: Debug>(_: T) -> Error {
    Error {
        code: 2,
        message: "storage write failed".into(),
    }
}

pub fn payload_error<T: Debug>(_: T) -> Error {
    Error {
        code: 3,
        message: "storage payload is invalid".into(),
    }
}

pub fn pool_not_found_error() -> Error {
    Error {
        code: 100,
        message: "pool not found".into(),
    }
}

pub fn pool_full_error() -> Error {
    Error {
        code: 101,
        message: "pool is full".into(),
    }
}

pub fn already_joined_error() -> Error {
    Error {
        code: 102,
        message: "already a passenger of this pool".into(),
    }
}

pub fn not_a_member_error() -> Error {
    Error {
        code: 103,
        message: "not a passenger of this pool".into(),
    }
}

pub fn already_accepted_error() -> Error {
    Error {
        code: 104,
        message: "pool already has a driver".into(),
    }
}

pub fn validation_error(message: &str) -> Error {
    Error {
        code: 105,
        message: message.into(),
    }
}
