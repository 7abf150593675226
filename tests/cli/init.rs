use anyhow::Result;

use crate::CliTest;

#[test]
fn init_creates_a_default_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.init_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    let config = test.read_file(".hotenvrc.json")?;
    assert!(config.contains("searchDirs"));
    assert!(config.contains("backupSuffix"));
    Ok(())
}

#[test]
fn init_refuses_to_overwrite_an_existing_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".hotenvrc.json", r#"{ "searchDirs": ["custom"] }"#)?;

    let output = test.init_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("already exists")
    );
    assert_eq!(
        test.read_file(".hotenvrc.json")?,
        r#"{ "searchDirs": ["custom"] }"#
    );
    Ok(())
}
