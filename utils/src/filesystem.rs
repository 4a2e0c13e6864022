/*
 * Copyright (c):
 * 2025 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of circular-motion-lab.
 *
 * circular-motion-lab is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * circular-motion-lab is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with circular-motion-lab. If not, see <https://www.gnu.org/licenses/>.
 */

use std::path::{Path, PathBuf};

/// Takes a name and turns it into a safe filename in the provided path. The filename
/// will be "safe" in the sense that the returned filename will be free of any characters that
/// would be illegal to use in a filesystem path and also unique so as not to
/// override anything else in the provided path. Additionally, any spaces in the filename will
/// be replaced with underscores.
///
/// To provide uniqueness a number will be appended to the returned filename if the name would
/// clash with anything else in the provided path. i.e. if you have a file called test.txt present
/// in the path then the next filename returned would be test2.txt
///
pub fn create_safe_filename_in_path(path: &Path, name: &str, extension: &str) -> PathBuf {
    let mut sanitized_name = sanitize_filename::sanitize(name);
    sanitized_name = sanitized_name.replace(" ", "_");
    let mut file_path = path.join(format!("{}.{}", sanitized_name, extension));
    let mut extra_num = 2;
    while file_path.exists() {
        file_path = path.join(format!("{}{}.{}", sanitized_name, extra_num, extension));
        extra_num += 1;
    }
    file_path
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use crate::filesystem::create_safe_filename_in_path;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("circular-motion-lab-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn unique_names_are_generated() {
        let dir = scratch_dir("filesystem");
        let first = create_safe_filename_in_path(&dir, "My Worksheet", "txt");
        assert_eq!(first, dir.join("My_Worksheet.txt"));
        fs::write(&first, "x").unwrap();

        let second = create_safe_filename_in_path(&dir, "My Worksheet", "txt");
        assert_eq!(second, dir.join("My_Worksheet2.txt"));
        fs::write(&second, "x").unwrap();

        let third = create_safe_filename_in_path(&dir, "My Worksheet", "txt");
        assert_eq!(third, dir.join("My_Worksheet3.txt"));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn illegal_characters_are_removed() {
        let dir = scratch_dir("sanitize");
        let path = create_safe_filename_in_path(&dir, "a/b:c", "txt");
        let filename = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(!filename.contains('/'));
        assert!(!filename.contains(':'));
        assert!(filename.ends_with(".txt"));
        fs::remove_dir_all(&dir).unwrap();
    }
}
