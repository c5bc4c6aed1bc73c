use matrix_rref::Matrix;
use matrix_rref::errors::MatrixError;

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new("info"))
            .unwrap();
        let fmt_layer = fmt::layer()
            .with_target(true)
            .with_line_number(false)
            .with_file(false);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .init();
    });
}

#[test]
fn showcase_invert_and_render() -> Result<(), MatrixError> {
    init_tracing();

    let m = Matrix::try_with(vec![
        vec![1.0, -1.0, 2.0],
        vec![2.0, 0.0, 3.0],
        vec![0.0, 1.0, -1.0],
    ])?;

    let inverse = m.inverse()?;

    dbg!(format!("{}", m));
    dbg!(format!("{}", inverse));

    // Columns holding a negative value reserve a leading space, so digits
    // line up regardless of sign.
    assert_eq!(format!("{}", m), "[1 -1  2]\n[2  0  3]\n[0  1 -1]");
    assert_eq!(
        format!("{}", inverse),
        "[ 3 -1  3]\n[-2  1 -1]\n[-2  1 -2]"
    );

    Ok(())
}

#[test]
fn showcase_rendering_aligns_on_width() -> Result<(), MatrixError> {
    init_tracing();

    let m = Matrix::try_with(vec![vec![100.0, -2.0], vec![3.0, 45.0]])?;

    assert_eq!(format!("{}", m), "[100  -2]\n[  3  45]");
    Ok(())
}
