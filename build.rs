fn main() -> Result<(), Box<dyn std::error::Error>> {
    let protoc = protoc_bin_vendored::protoc_bin_path().unwrap();
    std::env::set_var("PROTOC", protoc);

    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos(
            &[
                "src/schema/proto/common.proto",
                "src/schema/proto/vpc.proto",
                "src/schema/proto/subnet.proto",
                "src/schema/proto/port.proto",
                "src/schema/proto/securitygroup.proto",
                "src/schema/proto/goalstate.proto",
                "src/schema/proto/goalstateprovisioner.proto",
            ],
            &["src/schema/proto"],
        )?;
    Ok(())
}
