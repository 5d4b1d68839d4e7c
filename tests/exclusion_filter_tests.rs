use srccollect::ignore::{ExclusionFilter, ExclusionRule};
use srccollect::should_exclude;
use std::path::Path;

#[test]
fn test_excludes_build_and_generated_directories() {
    assert!(should_exclude("/work/android/app/build/Generated.java"));
    assert!(should_exclude("/work/android/app/build/intermediates/Foo.kt"));
    assert!(should_exclude("/work/android/app/src/generated/Api.java"));
    assert!(should_exclude("/work/android/.gradle/7.5/init.gradle"));
    assert!(should_exclude("/work/android/example/app/Main.java"));
}

#[test]
fn test_directory_rules_need_an_exact_segment() {
    assert!(!should_exclude("/work/android/app/builder/Main.java"));
    assert!(!should_exclude("/work/android/app/src/generated_api/Api.java"));
    assert!(!should_exclude("/work/android/examples/Main.java"));
    assert!(!should_exclude("/work/android/app/src/ExampleActivity.kt"));
}

#[test]
fn test_file_named_build_is_not_a_directory_match() {
    assert!(!should_exclude("/work/android/app/build.gradle"));
    assert!(!should_exclude("/work/android/app/build.gradle.kts"));
    assert!(!should_exclude("/work/android/app/src/Generated.java"));
}

#[test]
fn test_excludes_gradle_wrapper_files() {
    assert!(should_exclude("/work/android/gradlew"));
    assert!(should_exclude("/work/android/gradlew.bat"));
    assert!(should_exclude("/work/android/gradle/wrapper/gradle-wrapper.properties"));
    assert!(should_exclude("/work/android/gradle/wrapper/gradle-wrapper.jar"));
    assert!(!should_exclude("/work/android/gradle/wrapper/my-gradle-wrapper.gradle"));
}

#[test]
fn test_excludes_generated_resource_classes_at_any_depth() {
    for name in ["R.java", "R.kt", "BuildConfig.java", "BuildConfig.kt", "Manifest.java"] {
        assert!(should_exclude(name), "{} at top level", name);
        assert!(should_exclude(format!("android/{}", name)), "{} one level down", name);
        assert!(
            should_exclude(format!("/work/android/app/src/main/java/com/acme/{}", name)),
            "{} deeply nested",
            name
        );
    }
}

#[test]
fn test_generated_class_names_must_match_exactly() {
    assert!(!should_exclude("/work/android/app/src/Router.java"));
    assert!(!should_exclude("/work/android/app/src/MyR.java"));
    assert!(!should_exclude("/work/android/app/src/BuildConfigHelper.kt"));
    assert!(!should_exclude("/work/android/app/src/Manifest.kt"));
}

#[test]
fn test_rule_matching_on_relative_paths() {
    let rule = ExclusionRule::DirectoryNamed("build");
    assert!(rule.matches(Path::new("build/Foo.java")));
    assert!(!rule.matches(Path::new("build")));
    assert!(!rule.matches(Path::new("")));
}

#[test]
fn test_custom_filter_uses_only_its_rules() {
    let filter = ExclusionFilter::new(vec![ExclusionRule::FileNameEquals("Skip.java")]);
    assert!(filter.should_exclude("/work/android/app/Skip.java"));
    assert!(!filter.should_exclude("/work/android/app/build/Keep.java"));
}
