// Generated by build.rs into this directory

pub mod crud {
    include!("crud.rs");
}

pub mod health {
    include!("grpc.health.v1.rs");
}
