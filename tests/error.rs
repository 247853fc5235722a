use backdrop::error::{BackdropError, ConfigError, PlatformError, SurfaceError};
use pretty_assertions::assert_eq;

#[test]
fn test_backdrop_error_from_config_error() {
    let error: BackdropError = ConfigError::NonPositiveSize(0.0).into();
    assert!(matches!(error, BackdropError::Config(_)));
}

#[test]
fn test_backdrop_error_from_surface_error() {
    let error: BackdropError = SurfaceError::Draw("no renderer".to_string()).into();
    assert!(matches!(error, BackdropError::Surface(_)));
}

#[test]
fn test_backdrop_error_from_platform_error() {
    let error: BackdropError = PlatformError::ConsoleInit("already set".to_string()).into();
    assert!(matches!(error, BackdropError::Platform(_)));
}

#[test]
fn test_error_messages() {
    let error: BackdropError = SurfaceError::Resize {
        width: 10,
        height: 20,
        reason: "window gone".to_string(),
    }
    .into();
    assert_eq!(
        error.to_string(),
        "Surface error: Resizing to 10x20 failed: window gone"
    );

    assert_eq!(
        ConfigError::UnknownArgument("--x".to_string()).to_string(),
        "Unknown argument '--x'"
    );
    assert_eq!(BackdropError::Sdl("no video".to_string()).to_string(), "SDL error: no video");
}
