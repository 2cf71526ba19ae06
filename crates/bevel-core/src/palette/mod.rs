//! Semantic palettes.
//!
//! A [`PaletteSet`] holds one [`ShadeRamp`] per semantic role (window
//! background, buttons, selection, menus, sliders, ...). Ramps are shared
//! through `Arc` whenever two roles resolve to the same derivation, so a set
//! is cheap to clone and must never be mutated in place.

mod store;

pub use store::{PaletteStore, palette_store};

use crate::color::{Color, mid_color, shade, tint};
use crate::policy::{ShadingPolicy, percent_to_factor};
use crate::ramp::{MENU_STRIPE_SHADE, ShadeRamp};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Darkening applied to the window colour for darkened menubars.
pub const MENUBAR_DARK_FACTOR: f64 = 0.97;
/// Darkening applied to the selection colour for menubars on glass themes.
pub const MENUBAR_GLASS_SELECTED_DARK_FACTOR: f64 = 0.9;
/// Darkening applied for darkened list headers and check/radio backgrounds.
pub const LV_HEADER_DARK_FACTOR: f64 = 0.9;
/// How far the default button is tinted toward the selection colour.
pub const DEF_BTN_TINT: f64 = 0.4;

/// Base colours supplied by the host theme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeColors {
    pub window: Color,
    pub button: Color,
    pub button_disabled: Color,
    pub selected: Color,
    pub focus: Color,
    pub hover: Color,
    pub window_border_active: Color,
    pub window_border_inactive: Color,
    pub text: Color,
    pub text_disabled: Color,
    pub button_text: Color,
    pub button_text_disabled: Color,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            window: Color::from_rgb8(239, 239, 239),
            button: Color::from_rgb8(232, 232, 232),
            button_disabled: Color::from_rgb8(224, 224, 224),
            selected: Color::from_rgb8(61, 174, 233),
            focus: Color::from_rgb8(61, 174, 233),
            hover: Color::from_rgb8(147, 206, 233),
            window_border_active: Color::from_rgb8(71, 80, 87),
            window_border_inactive: Color::from_rgb8(239, 240, 241),
            text: Color::from_rgb8(35, 38, 39),
            text_disabled: Color::from_rgb8(160, 160, 160),
            button_text: Color::from_rgb8(35, 38, 39),
            button_text_disabled: Color::from_rgb8(160, 160, 160),
        }
    }
}

/// How a palette is coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadeMode {
    #[default]
    None,
    Custom,
    Selected,
    BlendSelected,
    Darken,
    WindowBorder,
}

/// How the default button is marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultButtonIndicator {
    Corner,
    Colored,
    FontColor,
    #[default]
    Tint,
    Glow,
    Darken,
    Selected,
    None,
}

/// Explicit colours used by [`ShadeMode::Custom`] palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomColors {
    pub menubar: Color,
    pub slider: Color,
    pub combo_button: Color,
    pub sorted_list: Color,
    pub check_radio: Color,
    pub check_radio_bgnd: Color,
    pub menu_stripe: Color,
    pub progress: Color,
}

/// Options that decide how the semantic palettes are derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteOptions {
    pub shade_menubars: ShadeMode,
    pub shade_sliders: ShadeMode,
    pub combo_button: ShadeMode,
    pub sorted_list: ShadeMode,
    pub shade_check_radio: ShadeMode,
    pub check_radio_bgnd: ShadeMode,
    pub menu_stripe: ShadeMode,
    pub progress: ShadeMode,
    pub default_button_indicator: DefaultButtonIndicator,
    pub custom: CustomColors,
    /// List view headers use the button colour instead of the window colour.
    pub lv_button: bool,
    /// Check and radio indicators use the button text colour.
    pub cr_button: bool,
    /// The widget appearance is one of the glass styles.
    pub glass: bool,
    pub shade_popup_menu: bool,
    /// Popup menu lightening in percent; zero disables it.
    pub lighter_popup_menu_bgnd: i32,
    pub menubar_only_when_active: bool,
    pub std_sidebar_buttons: bool,
    pub colored_mouse_over: bool,
}

impl Default for PaletteOptions {
    fn default() -> Self {
        Self {
            shade_menubars: ShadeMode::Darken,
            shade_sliders: ShadeMode::Selected,
            combo_button: ShadeMode::None,
            sorted_list: ShadeMode::None,
            shade_check_radio: ShadeMode::None,
            check_radio_bgnd: ShadeMode::None,
            menu_stripe: ShadeMode::None,
            progress: ShadeMode::Selected,
            default_button_indicator: DefaultButtonIndicator::default(),
            custom: CustomColors::default(),
            lv_button: false,
            cr_button: false,
            glass: false,
            shade_popup_menu: false,
            lighter_popup_menu_bgnd: 0,
            menubar_only_when_active: false,
            std_sidebar_buttons: false,
            colored_mouse_over: true,
        }
    }
}

/// Every palette the engine draws with, derived in one pass.
#[derive(Debug, Clone)]
pub struct PaletteSet {
    pub background: Arc<ShadeRamp>,
    pub button: Arc<ShadeRamp>,
    pub button_disabled: Arc<ShadeRamp>,
    pub highlight: Arc<ShadeRamp>,
    pub focus: Arc<ShadeRamp>,
    pub menubar: Arc<ShadeRamp>,
    /// Window border ramps, `[inactive, active]`.
    pub window_border: Option<[Arc<ShadeRamp>; 2]>,
    pub slider: Option<Arc<ShadeRamp>>,
    pub combo_button: Option<Arc<ShadeRamp>>,
    pub sorted_list: Option<Arc<ShadeRamp>>,
    pub default_button: Option<Arc<ShadeRamp>>,
    pub mouse_over: Option<Arc<ShadeRamp>>,
    pub menu: Arc<ShadeRamp>,
    pub selected_check_radio: Arc<ShadeRamp>,
    pub sidebar: Option<Arc<ShadeRamp>>,
    pub progress: Option<Arc<ShadeRamp>>,
    /// Colour of check marks and radio dots.
    pub check_radio: Color,
    pub menu_stripe: Color,
    colors: ThemeColors,
    options: PaletteOptions,
    policy: ShadingPolicy,
}

fn ramp(base: Color, policy: &ShadingPolicy) -> Arc<ShadeRamp> {
    Arc::new(ShadeRamp::generate(base, policy))
}

impl PaletteSet {
    /// Derive every palette from `colors` under `options` and `policy`.
    pub fn generate(colors: &ThemeColors, options: &PaletteOptions, policy: &ShadingPolicy) -> Self {
        let opts = options;
        let custom = &opts.custom;
        let shading = policy.shading;

        let background = ramp(colors.window, policy);
        let button = ramp(colors.button, policy);
        let button_disabled = ramp(colors.button_disabled, policy);
        let highlight = ramp(colors.selected, policy);
        let focus = ramp(colors.focus, policy);

        let blend_button = || ramp(mid_color(highlight.original(), button.original()), policy);

        let mut window_border = None;
        let menubar = match opts.shade_menubars {
            ShadeMode::WindowBorder => {
                let inactive = ramp(colors.window_border_inactive, policy);
                let active = ramp(colors.window_border_active, policy);
                window_border = Some([inactive, Arc::clone(&active)]);
                active
            }
            ShadeMode::None => Arc::clone(&background),
            ShadeMode::BlendSelected => ramp(mid_color(highlight.original(), background.original()), policy),
            ShadeMode::Selected => {
                let color = if opts.glass {
                    shade(highlight.original(), MENUBAR_GLASS_SELECTED_DARK_FACTOR, shading)
                } else {
                    highlight.original()
                };
                ramp(color, policy)
            }
            ShadeMode::Custom => ramp(custom.menubar, policy),
            ShadeMode::Darken => ramp(shade(background.original(), MENUBAR_DARK_FACTOR, shading), policy),
        };

        let slider = match opts.shade_sliders {
            ShadeMode::Selected => Some(Arc::clone(&highlight)),
            ShadeMode::Custom => Some(ramp(custom.slider, policy)),
            ShadeMode::BlendSelected => Some(blend_button()),
            _ => None,
        };

        let combo_button = match opts.combo_button {
            ShadeMode::Selected => Some(Arc::clone(&highlight)),
            ShadeMode::Custom => Some(
                reuse_custom(&[(opts.shade_sliders, custom.slider, &slider)], custom.combo_button)
                    .unwrap_or_else(|| ramp(custom.combo_button, policy)),
            ),
            ShadeMode::BlendSelected => {
                Some(reuse_blend(&[(opts.shade_sliders, &slider)]).unwrap_or_else(blend_button))
            }
            _ => None,
        };

        let header = if opts.lv_button { &button } else { &background };
        let sorted_list = match opts.sorted_list {
            ShadeMode::Darken => Some(ramp(shade(header.original(), LV_HEADER_DARK_FACTOR, shading), policy)),
            ShadeMode::Selected => Some(Arc::clone(&highlight)),
            ShadeMode::Custom => Some(
                reuse_custom(
                    &[
                        (opts.shade_sliders, custom.slider, &slider),
                        (opts.combo_button, custom.combo_button, &combo_button),
                    ],
                    custom.sorted_list,
                )
                .unwrap_or_else(|| ramp(custom.sorted_list, policy)),
            ),
            ShadeMode::BlendSelected => Some(
                reuse_blend(&[(opts.shade_sliders, &slider), (opts.combo_button, &combo_button)])
                    .unwrap_or_else(|| ramp(mid_color(highlight.original(), header.original()), policy)),
            ),
            _ => None,
        };

        let default_button = match opts.default_button_indicator {
            DefaultButtonIndicator::Tint => {
                Some(ramp(tint(button.original(), highlight.original(), DEF_BTN_TINT), policy))
            }
            DefaultButtonIndicator::Glow | DefaultButtonIndicator::Selected => Some(Arc::clone(&highlight)),
            DefaultButtonIndicator::Colored => {
                Some(reuse_blend(&[(opts.shade_sliders, &slider)]).unwrap_or_else(blend_button))
            }
            _ => None,
        };

        let mouse_over = opts.colored_mouse_over.then(|| ramp(colors.hover, policy));

        let check_radio = match opts.shade_check_radio {
            ShadeMode::BlendSelected | ShadeMode::Selected => colors.selected,
            ShadeMode::Custom => custom.check_radio,
            _ if opts.cr_button => colors.button_text,
            _ => colors.text,
        };

        let menu_source = if opts.shade_popup_menu {
            Arc::clone(menubar_ramp_for(opts, &background, &menubar, window_border.as_ref(), true))
        } else {
            Arc::clone(&background)
        };
        let menu = if opts.lighter_popup_menu_bgnd != 0 {
            let lighter = percent_to_factor(opts.lighter_popup_menu_bgnd);
            ramp(shade(menu_source.original(), lighter, shading), policy)
        } else {
            menu_source
        };

        let menu_is_styled = opts.lighter_popup_menu_bgnd != 0 || opts.shade_popup_menu;
        let menu_stripe = match opts.menu_stripe {
            ShadeMode::Darken if menu_is_styled => menu.original(),
            ShadeMode::Darken => background[MENU_STRIPE_SHADE],
            ShadeMode::Custom => custom.menu_stripe,
            ShadeMode::BlendSelected if menu_is_styled => mid_color(highlight.original(), menu.original()),
            ShadeMode::BlendSelected => mid_color(highlight.original(), background.original()),
            ShadeMode::Selected => highlight[MENU_STRIPE_SHADE],
            _ => background.original(),
        };

        let selected_check_radio = match opts.check_radio_bgnd {
            ShadeMode::Darken => ramp(shade(button.original(), LV_HEADER_DARK_FACTOR, shading), policy),
            ShadeMode::Selected => Arc::clone(&highlight),
            ShadeMode::Custom => reuse_custom(
                &[
                    (opts.shade_sliders, custom.slider, &slider),
                    (opts.combo_button, custom.combo_button, &combo_button),
                    (opts.sorted_list, custom.sorted_list, &sorted_list),
                ],
                custom.check_radio_bgnd,
            )
            .unwrap_or_else(|| ramp(custom.check_radio_bgnd, policy)),
            ShadeMode::BlendSelected => reuse_blend(&[
                (opts.shade_sliders, &slider),
                (opts.combo_button, &combo_button),
                (opts.sorted_list, &sorted_list),
            ])
            .unwrap_or_else(blend_button),
            _ => Arc::clone(&button),
        };

        let sidebar = if opts.std_sidebar_buttons {
            None
        } else if opts.shade_sliders == ShadeMode::BlendSelected && slider.is_some() {
            slider.clone()
        } else if opts.default_button_indicator == DefaultButtonIndicator::Colored && default_button.is_some() {
            default_button.clone()
        } else {
            Some(blend_button())
        };

        let selected_cr = Some(Arc::clone(&selected_check_radio));
        let progress = match opts.progress {
            ShadeMode::None => Some(Arc::clone(&background)),
            ShadeMode::Custom => Some(
                reuse_custom(
                    &[
                        (opts.shade_sliders, custom.slider, &slider),
                        (opts.combo_button, custom.combo_button, &combo_button),
                        (opts.sorted_list, custom.sorted_list, &sorted_list),
                        (opts.check_radio_bgnd, custom.check_radio_bgnd, &selected_cr),
                    ],
                    custom.progress,
                )
                .unwrap_or_else(|| ramp(custom.progress, policy)),
            ),
            ShadeMode::BlendSelected => Some(
                reuse_blend(&[
                    (opts.shade_sliders, &slider),
                    (opts.combo_button, &combo_button),
                    (opts.sorted_list, &sorted_list),
                    (opts.check_radio_bgnd, &selected_cr),
                ])
                .unwrap_or_else(|| ramp(mid_color(highlight.original(), background.original()), policy)),
            ),
            _ => None,
        };

        log::debug!(
            "Generated palettes (shading {:?}, contrast {}, menubar {:?})",
            policy.shading,
            policy.effective_contrast(),
            opts.shade_menubars
        );

        Self {
            background,
            button,
            button_disabled,
            highlight,
            focus,
            menubar,
            window_border,
            slider,
            combo_button,
            sorted_list,
            default_button,
            mouse_over,
            menu,
            selected_check_radio,
            sidebar,
            progress,
            check_radio,
            menu_stripe,
            colors: *colors,
            options: *options,
            policy: *policy,
        }
    }

    /// Palette set for the default colours, options and policy.
    pub fn with_defaults() -> Self {
        Self::generate(&ThemeColors::default(), &PaletteOptions::default(), &ShadingPolicy::default())
    }

    /// Ramp to draw a menubar with, depending on window activity.
    pub fn menubar_ramp(&self, active: bool) -> &Arc<ShadeRamp> {
        menubar_ramp_for(&self.options, &self.background, &self.menubar, self.window_border.as_ref(), active)
    }

    /// Slider ramp, falling back to the button ramp.
    pub fn slider_or_button(&self) -> &Arc<ShadeRamp> {
        self.slider.as_ref().unwrap_or(&self.button)
    }

    /// Combo button ramp, falling back to the button ramp.
    pub fn combo_button_or_button(&self) -> &Arc<ShadeRamp> {
        self.combo_button.as_ref().unwrap_or(&self.button)
    }

    /// Default button ramp, falling back to the button ramp.
    pub fn default_button_or_button(&self) -> &Arc<ShadeRamp> {
        self.default_button.as_ref().unwrap_or(&self.button)
    }

    /// Sidebar button ramp, falling back to the button ramp.
    pub fn sidebar_or_button(&self) -> &Arc<ShadeRamp> {
        self.sidebar.as_ref().unwrap_or(&self.button)
    }

    /// Progress bar ramp, falling back to the selection ramp.
    pub fn progress_or_highlight(&self) -> &Arc<ShadeRamp> {
        self.progress.as_ref().unwrap_or(&self.highlight)
    }

    /// Button ramp for the enabled or disabled state.
    pub fn button_ramp(&self, disabled: bool) -> &Arc<ShadeRamp> {
        if disabled { &self.button_disabled } else { &self.button }
    }

    /// Check mark colour, using the disabled text colour when insensitive.
    pub fn check_radio_color(&self, disabled: bool) -> Color {
        match (disabled, self.options.cr_button) {
            (true, true) => self.colors.button_text_disabled,
            (true, false) => self.colors.text_disabled,
            (false, _) => self.check_radio,
        }
    }

    pub fn colors(&self) -> &ThemeColors {
        &self.colors
    }

    pub fn options(&self) -> &PaletteOptions {
        &self.options
    }

    pub fn policy(&self) -> &ShadingPolicy {
        &self.policy
    }
}

impl Default for PaletteSet {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn menubar_ramp_for<'a>(
    options: &PaletteOptions,
    background: &'a Arc<ShadeRamp>,
    menubar: &'a Arc<ShadeRamp>,
    window_border: Option<&'a [Arc<ShadeRamp>; 2]>,
    active: bool,
) -> &'a Arc<ShadeRamp> {
    match (options.shade_menubars, window_border) {
        (ShadeMode::WindowBorder, Some(borders)) => &borders[usize::from(active)],
        (ShadeMode::None, _) => background,
        _ if options.menubar_only_when_active && !active => background,
        _ => menubar,
    }
}

/// First earlier palette that is custom with the same colour.
fn reuse_custom(
    candidates: &[(ShadeMode, Color, &Option<Arc<ShadeRamp>>)],
    color: Color,
) -> Option<Arc<ShadeRamp>> {
    candidates.iter().find_map(|(mode, candidate, ramp)| match ramp {
        Some(ramp) if *mode == ShadeMode::Custom && *candidate == color => Some(Arc::clone(ramp)),
        _ => None,
    })
}

/// First earlier palette that is blended with the selection colour.
fn reuse_blend(candidates: &[(ShadeMode, &Option<Arc<ShadeRamp>>)]) -> Option<Arc<ShadeRamp>> {
    candidates.iter().find_map(|(mode, ramp)| match ramp {
        Some(ramp) if *mode == ShadeMode::BlendSelected => Some(Arc::clone(ramp)),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ramp::ORIGINAL_SHADE;

    fn colors() -> ThemeColors {
        ThemeColors::default()
    }

    fn generate(options: PaletteOptions) -> PaletteSet {
        PaletteSet::generate(&colors(), &options, &ShadingPolicy::default())
    }

    #[test]
    fn test_base_palettes() {
        let set = generate(PaletteOptions::default());
        let c = colors();
        assert_eq!(set.background.original(), c.window);
        assert_eq!(set.button.original(), c.button);
        assert_eq!(set.button_disabled.original(), c.button_disabled);
        assert_eq!(set.highlight.original(), c.selected);
        assert_eq!(set.focus.original(), c.focus);
    }

    #[test]
    fn test_menubar_none_aliases_background() {
        let set = generate(PaletteOptions { shade_menubars: ShadeMode::None, ..Default::default() });
        assert!(Arc::ptr_eq(&set.menubar, &set.background));
        assert!(Arc::ptr_eq(set.menubar_ramp(true), &set.background));
    }

    #[test]
    fn test_menubar_darken() {
        let set = generate(PaletteOptions { shade_menubars: ShadeMode::Darken, ..Default::default() });
        let expected = shade(colors().window, MENUBAR_DARK_FACTOR, ShadingPolicy::default().shading);
        assert_eq!(set.menubar.original(), expected);
        assert!(!Arc::ptr_eq(&set.menubar, &set.background));
    }

    #[test]
    fn test_menubar_window_border() {
        let set = generate(PaletteOptions { shade_menubars: ShadeMode::WindowBorder, ..Default::default() });
        let borders = set.window_border.as_ref().unwrap();
        assert_eq!(borders[0].original(), colors().window_border_inactive);
        assert_eq!(borders[1].original(), colors().window_border_active);
        assert!(Arc::ptr_eq(set.menubar_ramp(true), &borders[1]));
        assert!(Arc::ptr_eq(set.menubar_ramp(false), &borders[0]));
    }

    #[test]
    fn test_menubar_only_when_active() {
        let set = generate(PaletteOptions {
            shade_menubars: ShadeMode::Selected,
            menubar_only_when_active: true,
            ..Default::default()
        });
        assert!(Arc::ptr_eq(set.menubar_ramp(false), &set.background));
        assert!(Arc::ptr_eq(set.menubar_ramp(true), &set.menubar));
    }

    #[test]
    fn test_menubar_selected_glass_darkens() {
        let plain = generate(PaletteOptions { shade_menubars: ShadeMode::Selected, ..Default::default() });
        let glass = generate(PaletteOptions {
            shade_menubars: ShadeMode::Selected,
            glass: true,
            ..Default::default()
        });
        assert_eq!(plain.menubar.original(), colors().selected);
        assert_ne!(glass.menubar.original(), colors().selected);
    }

    #[test]
    fn test_slider_selected_aliases_highlight() {
        let set = generate(PaletteOptions { shade_sliders: ShadeMode::Selected, ..Default::default() });
        assert!(Arc::ptr_eq(set.slider.as_ref().unwrap(), &set.highlight));
    }

    #[test]
    fn test_slider_none_falls_back_to_button() {
        let set = generate(PaletteOptions { shade_sliders: ShadeMode::None, ..Default::default() });
        assert!(set.slider.is_none());
        assert!(Arc::ptr_eq(set.slider_or_button(), &set.button));
    }

    #[test]
    fn test_combo_reuses_custom_slider() {
        let custom = CustomColors {
            slider: Color::from_rgb8(200, 0, 0),
            combo_button: Color::from_rgb8(200, 0, 0),
            ..Default::default()
        };
        let set = generate(PaletteOptions {
            shade_sliders: ShadeMode::Custom,
            combo_button: ShadeMode::Custom,
            custom,
            ..Default::default()
        });
        assert!(Arc::ptr_eq(set.slider.as_ref().unwrap(), set.combo_button.as_ref().unwrap()));
    }

    #[test]
    fn test_combo_custom_different_colour_is_new() {
        let custom = CustomColors {
            slider: Color::from_rgb8(200, 0, 0),
            combo_button: Color::from_rgb8(0, 200, 0),
            ..Default::default()
        };
        let set = generate(PaletteOptions {
            shade_sliders: ShadeMode::Custom,
            combo_button: ShadeMode::Custom,
            custom,
            ..Default::default()
        });
        let combo = set.combo_button.as_ref().unwrap();
        assert!(!Arc::ptr_eq(set.slider.as_ref().unwrap(), combo));
        assert_eq!(combo.original(), custom.combo_button);
    }

    #[test]
    fn test_blend_chain_shares_one_ramp() {
        let set = generate(PaletteOptions {
            shade_sliders: ShadeMode::BlendSelected,
            combo_button: ShadeMode::BlendSelected,
            sorted_list: ShadeMode::BlendSelected,
            check_radio_bgnd: ShadeMode::BlendSelected,
            progress: ShadeMode::BlendSelected,
            default_button_indicator: DefaultButtonIndicator::Colored,
            ..Default::default()
        });
        let slider = set.slider.as_ref().unwrap();
        assert!(Arc::ptr_eq(slider, set.combo_button.as_ref().unwrap()));
        assert!(Arc::ptr_eq(slider, set.sorted_list.as_ref().unwrap()));
        assert!(Arc::ptr_eq(slider, &set.selected_check_radio));
        assert!(Arc::ptr_eq(slider, set.progress.as_ref().unwrap()));
        assert!(Arc::ptr_eq(slider, set.default_button.as_ref().unwrap()));
        assert!(Arc::ptr_eq(slider, set.sidebar.as_ref().unwrap()));
        assert_eq!(slider.original(), mid_color(colors().selected, colors().button));
    }

    #[test]
    fn test_sorted_list_darken_uses_header_colour() {
        let set = generate(PaletteOptions {
            sorted_list: ShadeMode::Darken,
            lv_button: true,
            ..Default::default()
        });
        let expected = shade(colors().button, LV_HEADER_DARK_FACTOR, ShadingPolicy::default().shading);
        assert_eq!(set.sorted_list.as_ref().unwrap().original(), expected);
    }

    #[test]
    fn test_default_button_tint() {
        let set = generate(PaletteOptions {
            default_button_indicator: DefaultButtonIndicator::Tint,
            ..Default::default()
        });
        let expected = tint(colors().button, colors().selected, DEF_BTN_TINT);
        assert_eq!(set.default_button.as_ref().unwrap().original(), expected);
    }

    #[test]
    fn test_default_button_glow_aliases_highlight() {
        let set = generate(PaletteOptions {
            default_button_indicator: DefaultButtonIndicator::Glow,
            ..Default::default()
        });
        assert!(Arc::ptr_eq(set.default_button.as_ref().unwrap(), &set.highlight));
    }

    #[test]
    fn test_default_button_corner_absent() {
        let set = generate(PaletteOptions {
            default_button_indicator: DefaultButtonIndicator::Corner,
            ..Default::default()
        });
        assert!(set.default_button.is_none());
        assert!(Arc::ptr_eq(set.default_button_or_button(), &set.button));
    }

    #[test]
    fn test_mouse_over() {
        let on = generate(PaletteOptions::default());
        assert_eq!(on.mouse_over.as_ref().unwrap().original(), colors().hover);
        let off = generate(PaletteOptions { colored_mouse_over: false, ..Default::default() });
        assert!(off.mouse_over.is_none());
    }

    #[test]
    fn test_check_radio_colour() {
        let c = colors();
        let set = generate(PaletteOptions::default());
        assert_eq!(set.check_radio, c.text);
        assert_eq!(set.check_radio_color(true), c.text_disabled);

        let set = generate(PaletteOptions { cr_button: true, ..Default::default() });
        assert_eq!(set.check_radio, c.button_text);
        assert_eq!(set.check_radio_color(true), c.button_text_disabled);

        let set = generate(PaletteOptions { shade_check_radio: ShadeMode::BlendSelected, ..Default::default() });
        assert_eq!(set.check_radio, c.selected);
    }

    #[test]
    fn test_menu_aliases_background_when_plain() {
        let set = generate(PaletteOptions::default());
        assert!(Arc::ptr_eq(&set.menu, &set.background));
    }

    #[test]
    fn test_menu_lightened() {
        let set = generate(PaletteOptions { lighter_popup_menu_bgnd: 5, ..Default::default() });
        let expected = shade(colors().window, 1.05, ShadingPolicy::default().shading);
        assert_eq!(set.menu.original(), expected);
    }

    #[test]
    fn test_menu_shaded_follows_menubar() {
        let set = generate(PaletteOptions {
            shade_popup_menu: true,
            shade_menubars: ShadeMode::Custom,
            custom: CustomColors { menubar: Color::from_rgb8(10, 20, 30), ..Default::default() },
            ..Default::default()
        });
        assert!(Arc::ptr_eq(&set.menu, &set.menubar));
    }

    #[test]
    fn test_menu_stripe() {
        let set = generate(PaletteOptions { menu_stripe: ShadeMode::Darken, ..Default::default() });
        assert_eq!(set.menu_stripe, set.background[MENU_STRIPE_SHADE]);

        let set = generate(PaletteOptions { menu_stripe: ShadeMode::Selected, ..Default::default() });
        assert_eq!(set.menu_stripe, set.highlight[MENU_STRIPE_SHADE]);

        let set = generate(PaletteOptions { menu_stripe: ShadeMode::None, ..Default::default() });
        assert_eq!(set.menu_stripe, set.background[ORIGINAL_SHADE]);
    }

    #[test]
    fn test_selected_check_radio_none_aliases_button() {
        let set = generate(PaletteOptions::default());
        assert!(Arc::ptr_eq(&set.selected_check_radio, &set.button));
    }

    #[test]
    fn test_progress_reuses_custom_check_radio_bgnd() {
        let colour = Color::from_rgb8(1, 2, 3);
        let set = generate(PaletteOptions {
            check_radio_bgnd: ShadeMode::Custom,
            progress: ShadeMode::Custom,
            custom: CustomColors { check_radio_bgnd: colour, progress: colour, ..Default::default() },
            ..Default::default()
        });
        assert!(Arc::ptr_eq(set.progress.as_ref().unwrap(), &set.selected_check_radio));
    }

    #[test]
    fn test_progress_selected_is_absent() {
        let set = generate(PaletteOptions::default());
        assert!(set.progress.is_none());
        assert!(Arc::ptr_eq(set.progress_or_highlight(), &set.highlight));
    }

    #[test]
    fn test_sidebar_std_buttons() {
        let set = generate(PaletteOptions { std_sidebar_buttons: true, ..Default::default() });
        assert!(set.sidebar.is_none());
        assert!(Arc::ptr_eq(set.sidebar_or_button(), &set.button));
    }

    #[test]
    fn test_generate_deterministic() {
        let a = generate(PaletteOptions::default());
        let b = generate(PaletteOptions::default());
        assert_eq!(*a.menubar, *b.menubar);
        assert_eq!(*a.button, *b.button);
        assert_eq!(a.menu_stripe, b.menu_stripe);
    }
}
