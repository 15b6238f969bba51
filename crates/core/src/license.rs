//! Bundled license texts and per-family copyright attributions.

use std::{
    fmt,
    fs::write,
    path::{Path, PathBuf},
};

use log::debug;

use crate::error::{Error, Result};

/// License a font family is distributed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum License {
    /// SIL Open Font License 1.1.
    Ofl,
    /// Apache License 2.0.
    Apache,
    /// Ubuntu Font Licence 1.0.
    Ufl,
}

impl License {
    /// Key used as the license file stem.
    pub const fn key(self) -> &'static str {
        match self {
            License::Ofl => "OFL",
            License::Apache => "Apache-2.0",
            License::Ufl => "UFL-1.0",
        }
    }

    /// Full license body.
    pub const fn text(self) -> &'static str {
        match self {
            License::Ofl => include_str!("../licenses/OFL.txt"),
            License::Apache => include_str!("../licenses/Apache-2.0.txt"),
            License::Ufl => include_str!("../licenses/UFL-1.0.txt"),
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.txt", self.key())
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Copyright data for a font family.
#[derive(Debug, Clone, Copy)]
pub struct Copyright {
    pub license: License,
    pub attribution: &'static str,
}

impl Copyright {
    const fn new(license: License, attribution: &'static str) -> Self {
        Self { license, attribution }
    }

    /// Attribution, a blank line, then the license body.
    pub fn notice(&self) -> String {
        format!("{}\n\n{}", self.attribution, self.license.text())
    }
}

/// Copyright data keyed by directory-form family name (first space replaced by `_`).
pub const COPYRIGHTS: &[(&str, Copyright)] = &[
    (
        "DM_Sans",
        Copyright::new(
            License::Ofl,
            "Copyright 2014 The DM Sans Project Authors (https://github.com/googlefonts/dm-fonts)",
        ),
    ),
    (
        "Fira_Sans",
        Copyright::new(
            License::Ofl,
            "Copyright (c) 2012-2015, The Mozilla Foundation and Telefonica S.A.",
        ),
    ),
    (
        "IBM_Plex Sans",
        Copyright::new(
            License::Ofl,
            "Copyright © 2017 IBM Corp. with Reserved Font Name \"Plex\"",
        ),
    ),
    (
        "Inter",
        Copyright::new(
            License::Ofl,
            "Copyright 2020 The Inter Project Authors (https://github.com/rsms/inter)",
        ),
    ),
    (
        "JetBrains_Mono",
        Copyright::new(
            License::Ofl,
            "Copyright 2020 The JetBrains Mono Project Authors (https://github.com/JetBrains/JetBrainsMono)",
        ),
    ),
    (
        "Karla",
        Copyright::new(
            License::Ofl,
            "Copyright 2019 The Karla Project Authors (https://github.com/googlefonts/karla)",
        ),
    ),
    (
        "Lato",
        Copyright::new(
            License::Ofl,
            "Copyright (c) 2010-2014 by tyPoland Lukasz Dziedzic (team@latofonts.com) with Reserved Font Name \"Lato\"",
        ),
    ),
    (
        "Merriweather",
        Copyright::new(
            License::Ofl,
            "Copyright 2016 The Merriweather Project Authors (https://github.com/EbenSorkin/Merriweather), with Reserved Font Name \"Merriweather\".",
        ),
    ),
    (
        "Montserrat",
        Copyright::new(
            License::Ofl,
            "Copyright 2011 The Montserrat Project Authors (https://github.com/JulietaUla/Montserrat)",
        ),
    ),
    (
        "Mulish",
        Copyright::new(
            License::Ofl,
            "Copyright 2016 The Mulish Project Authors (https://github.com/googlefonts/mulish)",
        ),
    ),
    (
        "Noto_Sans",
        Copyright::new(
            License::Ofl,
            "Copyright 2022 The Noto Project Authors (https://github.com/notofonts/latin-greek-cyrillic)",
        ),
    ),
    (
        "Noto_Serif",
        Copyright::new(
            License::Ofl,
            "Copyright 2022 The Noto Project Authors (https://github.com/notofonts/latin-greek-cyrillic)",
        ),
    ),
    (
        "Nunito",
        Copyright::new(
            License::Ofl,
            "Copyright 2014 The Nunito Project Authors (https://github.com/googlefonts/nunito)",
        ),
    ),
    (
        "Open_Sans",
        Copyright::new(
            License::Ofl,
            "Copyright 2020 The Open Sans Project Authors (https://github.com/googlefonts/opensans)",
        ),
    ),
    (
        "Oswald",
        Copyright::new(
            License::Ofl,
            "Copyright 2016 The Oswald Project Authors (https://github.com/googlefonts/OswaldFont)",
        ),
    ),
    (
        "Playfair_Display",
        Copyright::new(
            License::Ofl,
            "Copyright 2017 The Playfair Display Project Authors (https://github.com/clauseggers/Playfair-Display), with Reserved Font Name \"Playfair Display\".",
        ),
    ),
    (
        "Poppins",
        Copyright::new(
            License::Ofl,
            "Copyright 2020 The Poppins Project Authors (https://github.com/itfoundry/Poppins)",
        ),
    ),
    (
        "PT_Sans",
        Copyright::new(
            License::Ofl,
            "Copyright (c) 2010, ParaType Ltd. (http://www.paratype.com/public), with Reserved Font Names \"PT Sans\" and \"ParaType\".",
        ),
    ),
    (
        "Raleway",
        Copyright::new(
            License::Ofl,
            "Copyright 2010 The Raleway Project Authors (impallari@gmail.com), with Reserved Font Name \"Raleway\".",
        ),
    ),
    (
        "Roboto",
        Copyright::new(License::Apache, "Copyright 2011 Google Inc. All Rights Reserved."),
    ),
    (
        "Roboto_Mono",
        Copyright::new(License::Apache, "Copyright 2015 Google Inc. All Rights Reserved."),
    ),
    (
        "Roboto_Slab",
        Copyright::new(
            License::Apache,
            "Copyright 2018 The Roboto Slab Project Authors (https://github.com/googlefonts/robotoslab)",
        ),
    ),
    (
        "Rubik",
        Copyright::new(
            License::Ofl,
            "Copyright 2020 The Rubik Project Authors (https://github.com/googlefonts/rubik)",
        ),
    ),
    (
        "Source_Code Pro",
        Copyright::new(
            License::Ofl,
            "Copyright 2010-2020 Adobe (http://www.adobe.com/), with Reserved Font Name 'Source'.",
        ),
    ),
    (
        "Space_Grotesk",
        Copyright::new(
            License::Ofl,
            "Copyright 2020 The Space Grotesk Project Authors (https://github.com/floriankarsten/space-grotesk)",
        ),
    ),
    (
        "Ubuntu",
        Copyright::new(
            License::Ufl,
            "Copyright 2011 Canonical Ltd.  Licensed under the Ubuntu Font Licence 1.0",
        ),
    ),
    (
        "Ubuntu_Condensed",
        Copyright::new(
            License::Ufl,
            "Copyright 2011 Canonical Ltd.  Licensed under the Ubuntu Font Licence 1.0",
        ),
    ),
    (
        "Ubuntu_Mono",
        Copyright::new(
            License::Ufl,
            "Copyright 2011 Canonical Ltd.  Licensed under the Ubuntu Font Licence 1.0",
        ),
    ),
    (
        "Work_Sans",
        Copyright::new(
            License::Ofl,
            "Copyright 2019 The Work Sans Project Authors (https://github.com/weiweihuanghuang/Work-Sans)",
        ),
    ),
];

/// Look up copyright data for a directory-form family name.
pub fn lookup(font_name: &str) -> Option<&'static Copyright> {
    COPYRIGHTS.iter().find(|(name, _)| *name == font_name).map(|(_, copyright)| copyright)
}

/// What [`attach_license`] did for a family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LicenseOutcome {
    /// The family has no bundled copyright data.
    Unknown,
    /// A license file was already present and left alone.
    Existing(PathBuf),
    /// A new license file was written.
    Written(PathBuf),
}

/// Write `<family_dir>/<license key>.txt` for `font_name` if it is not there yet.
pub fn attach_license(family_dir: &Path, font_name: &str) -> Result<LicenseOutcome> {
    let Some(copyright) = lookup(font_name) else {
        return Ok(LicenseOutcome::Unknown);
    };

    let path = family_dir.join(copyright.license.file_name());
    if path.exists() {
        debug!("License already present: {}", path.display());
        return Ok(LicenseOutcome::Existing(path));
    }

    write(&path, copyright.notice()).map_err(|source| Error::io(&path, source))?;
    debug!("Wrote {} license for {font_name}", copyright.license);
    Ok(LicenseOutcome::Written(path))
}

#[cfg(test)]
mod tests {
    use std::fs::read_to_string;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_lookup_uses_directory_names() {
        assert_eq!(lookup("Open_Sans").unwrap().license, License::Ofl);
        assert_eq!(lookup("Roboto").unwrap().license, License::Apache);
        assert!(lookup("Source_Code Pro").is_some());
        assert!(lookup("Open Sans").is_none());
    }

    #[test]
    fn test_table_names_are_unique() {
        for (i, (name, _)) in COPYRIGHTS.iter().enumerate() {
            assert!(
                COPYRIGHTS[i + 1..].iter().all(|(other, _)| other != name),
                "duplicate entry {name}"
            );
        }
    }

    #[test]
    fn test_attach_license_writes_notice() {
        let dir = TempDir::new().unwrap();

        let outcome = attach_license(dir.path(), "Lato").unwrap();

        let path = dir.path().join("OFL.txt");
        assert_eq!(outcome, LicenseOutcome::Written(path.clone()));
        let content = read_to_string(path).unwrap();
        let attribution = lookup("Lato").unwrap().attribution;
        assert!(content.starts_with(&format!("{attribution}\n\n")));
        assert!(content.ends_with(License::Ofl.text()));
    }

    #[test]
    fn test_attach_license_keeps_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Apache-2.0.txt");
        std::fs::write(&path, "custom").unwrap();

        let outcome = attach_license(dir.path(), "Roboto").unwrap();

        assert_eq!(outcome, LicenseOutcome::Existing(path.clone()));
        assert_eq!(read_to_string(path).unwrap(), "custom");
    }

    #[test]
    fn test_ubuntu_families_use_ubuntu_font_licence() {
        let dir = TempDir::new().unwrap();

        let outcome = attach_license(dir.path(), "Ubuntu_Mono").unwrap();

        let path = dir.path().join("UFL-1.0.txt");
        assert_eq!(outcome, LicenseOutcome::Written(path.clone()));
        let content = read_to_string(path).unwrap();
        assert!(content.contains("UBUNTU FONT LICENCE Version 1.0"));
        assert_eq!(lookup("Ubuntu").unwrap().license, License::Ufl);
    }

    #[test]
    fn test_attach_license_unknown_family() {
        let dir = TempDir::new().unwrap();
        assert_eq!(attach_license(dir.path(), "Comic_Neue").unwrap(), LicenseOutcome::Unknown);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
