//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowUp as ArrowUp, LuBookOpen as Book, LuChevronDown as ChevronDown,
        LuChevronRight as ChevronRight, LuFileText as FileText, LuFolder as Folder,
        LuFolderOpen as FolderOpen, LuHouse as Home, LuInfo as Info, LuLink as Link,
        LuMenu as Menu, LuMoon as Moon,
        LuRotateCw as Reload, LuSearch as Search, LuSun as Sun, LuTriangleAlert as Alert,
        LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowClockwise as Reload, BsArrowUp as ArrowUp, BsBook as Book,
        BsChevronDown as ChevronDown, BsChevronRight as ChevronRight,
        BsExclamationTriangle as Alert, BsFileEarmarkText as FileText, BsFolder2Open as FolderOpen,
        BsFolderFill as Folder, BsHouseFill as Home, BsInfoCircle as Info,
        BsLink45deg as Link, BsList as Menu, BsMoonFill as Moon,
        BsSearch as Search, BsSunFill as Sun, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(ALERT, Alert);
themed_icon!(ARROW_UP, ArrowUp);
themed_icon!(BOOK, Book);
themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(CLOSE, Close);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FOLDER, Folder);
themed_icon!(FOLDER_OPEN, FolderOpen);
themed_icon!(HOME, Home);
themed_icon!(INFO, Info);
themed_icon!(LINK, Link);
themed_icon!(MENU, Menu);
themed_icon!(MOON, Moon);
themed_icon!(RELOAD, Reload);
themed_icon!(SEARCH, Search);
themed_icon!(SUN, Sun);
