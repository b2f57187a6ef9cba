//! Global CSS styles for LearnHub.
//!
//! A light theme plus the utility classes the component library's variant
//! resolver emits. Pseudo-class utilities (`hover:`, `focus-visible:`,
//! `disabled:`) are written with escaped selectors so the class names in the
//! resolver can be used unchanged.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* PRIMARY (brand blue) */
  --primary-50: #eff6ff;
  --primary-100: #dbeafe;
  --primary-500: #3b82f6;
  --primary-600: #2563eb;
  --primary-700: #1d4ed8;
  --primary-800: #1e40af;

  /* SECONDARY (violet) */
  --secondary-600: #7c3aed;
  --secondary-700: #6d28d9;
  --secondary-800: #5b21b6;

  /* NEUTRAL */
  --neutral-50: #fafafa;
  --neutral-100: #f5f5f5;
  --neutral-200: #e5e5e5;
  --neutral-300: #d4d4d4;
  --neutral-400: #a3a3a3;
  --neutral-500: #737373;
  --neutral-600: #525252;
  --neutral-700: #404040;
  --neutral-900: #171717;
  --neutral-950: #0a0a0a;

  /* SEMANTIC */
  --success-100: #dcfce7;
  --success-500: #22c55e;
  --success-600: #16a34a;
  --warning-50: #fffbeb;
  --warning-200: #fde68a;
  --warning-500: #f59e0b;
  --warning-600: #d97706;
  --warning-700: #b45309;
  --warning-800: #92400e;
  --error-500: #ef4444;
  --error-600: #dc2626;
  --error-700: #b91c1c;
  --info-500: #0ea5e9;
  --info-600: #0284c7;

  /* Typography */
  --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Elevation */
  --shadow-sm: 0 1px 2px rgba(0, 0, 0, 0.05);
  --shadow-medium: 0 4px 16px rgba(0, 0, 0, 0.08);

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
  border-width: 0;
  border-style: solid;
  border-color: var(--neutral-200);
}

html, body {
  font-family: var(--font-sans);
  font-size: 16px;
  line-height: 1.5;
  color: var(--neutral-900);
  background: var(--neutral-50);
  -webkit-font-smoothing: antialiased;
}

a { color: inherit; text-decoration: none; }
button, input, select, textarea { font: inherit; color: inherit; }
button { background: none; cursor: pointer; }
img { display: block; max-width: 100%; }
table { border-collapse: collapse; width: 100%; }

/* === Layout === */
.container { width: 100%; max-width: 1200px; margin: 0 auto; padding: 0 1.5rem; }
.block { display: block; }
.flex { display: flex; }
.inline-flex { display: inline-flex; }
.grid { display: grid; }
.flex-1 { flex: 1 1 0%; }
.flex-col { flex-direction: column; }
.flex-wrap { flex-wrap: wrap; }
.shrink-0 { flex-shrink: 0; }
.items-center { align-items: center; }
.items-start { align-items: flex-start; }
.justify-between { justify-content: space-between; }
.justify-center { justify-content: center; }
.justify-end { justify-content: flex-end; }
.grid-cols-2 { grid-template-columns: repeat(2, minmax(0, 1fr)); }
.grid-cols-3 { grid-template-columns: repeat(3, minmax(0, 1fr)); }
.grid-cols-4 { grid-template-columns: repeat(4, minmax(0, 1fr)); }
.gap-1 { gap: 0.25rem; }
.gap-2 { gap: 0.5rem; }
.gap-3 { gap: 0.75rem; }
.gap-4 { gap: 1rem; }
.gap-6 { gap: 1.5rem; }
.gap-8 { gap: 2rem; }
.gap-12 { gap: 3rem; }
.space-x-6 > * + * { margin-left: 1.5rem; }
.space-y-1 > * + * { margin-top: 0.25rem; }
.space-y-1\.5 > * + * { margin-top: 0.375rem; }
.space-y-2 > * + * { margin-top: 0.5rem; }
.space-y-3 > * + * { margin-top: 0.75rem; }
.space-y-4 > * + * { margin-top: 1rem; }
.space-y-6 > * + * { margin-top: 1.5rem; }
.space-y-8 > * + * { margin-top: 2rem; }
.space-y-12 > * + * { margin-top: 3rem; }

.relative { position: relative; }
.absolute { position: absolute; }
.sticky { position: sticky; }
.inset-0 { top: 0; right: 0; bottom: 0; left: 0; }
.top-0 { top: 0; }
.top-3 { top: 0.75rem; }
.top-24 { top: 6rem; }
.right-0 { right: 0; }
.right-3 { right: 0.75rem; }
.z-50 { z-index: 50; }
.overflow-hidden { overflow: hidden; }
.overflow-x-auto { overflow-x: auto; }
.min-h-screen { min-height: 100vh; }
.min-h-24 { min-height: 6rem; }
.aspect-square { aspect-ratio: 1 / 1; }
.object-cover { object-fit: cover; }

/* === Sizing === */
.w-full { width: 100%; }
.w-1\/2 { width: 50%; }
.w-1\/4 { width: 25%; }
.w-3\/4 { width: 75%; }
.w-4 { width: 1rem; }
.w-6 { width: 1.5rem; }
.w-8 { width: 2rem; }
.w-10 { width: 2.5rem; }
.w-12 { width: 3rem; }
.w-16 { width: 4rem; }
.w-20 { width: 5rem; }
.w-24 { width: 6rem; }
.w-48 { width: 12rem; }
.h-full { height: 100%; }
.h-auto { height: auto; }
.h-4 { height: 1rem; }
.h-6 { height: 1.5rem; }
.h-8 { height: 2rem; }
.h-9 { height: 2.25rem; }
.h-10 { height: 2.5rem; }
.h-11 { height: 2.75rem; }
.h-12 { height: 3rem; }
.h-16 { height: 4rem; }
.h-20 { height: 5rem; }
.h-48 { height: 12rem; }
.max-w-md { max-width: 28rem; }
.max-w-xl { max-width: 36rem; }
.max-w-2xl { max-width: 42rem; }

/* === Spacing === */
.p-0 { padding: 0; }
.p-1 { padding: 0.25rem; }
.p-2 { padding: 0.5rem; }
.p-4 { padding: 1rem; }
.p-6 { padding: 1.5rem; }
.p-8 { padding: 2rem; }
.px-2 { padding-left: 0.5rem; padding-right: 0.5rem; }
.px-2\.5 { padding-left: 0.625rem; padding-right: 0.625rem; }
.px-3 { padding-left: 0.75rem; padding-right: 0.75rem; }
.px-4 { padding-left: 1rem; padding-right: 1rem; }
.px-8 { padding-left: 2rem; padding-right: 2rem; }
.py-0\.5 { padding-top: 0.125rem; padding-bottom: 0.125rem; }
.py-1 { padding-top: 0.25rem; padding-bottom: 0.25rem; }
.py-2 { padding-top: 0.5rem; padding-bottom: 0.5rem; }
.py-4 { padding-top: 1rem; padding-bottom: 1rem; }
.py-6 { padding-top: 1.5rem; padding-bottom: 1.5rem; }
.py-8 { padding-top: 2rem; padding-bottom: 2rem; }
.py-12 { padding-top: 3rem; padding-bottom: 3rem; }
.py-16 { padding-top: 4rem; padding-bottom: 4rem; }
.pt-2 { padding-top: 0.5rem; }
.pt-4 { padding-top: 1rem; }
.pt-6 { padding-top: 1.5rem; }
.pl-10 { padding-left: 2.5rem; }
.pr-10 { padding-right: 2.5rem; }
.mx-auto { margin-left: auto; margin-right: auto; }
.my-2 { margin-top: 0.5rem; margin-bottom: 0.5rem; }
.mt-1 { margin-top: 0.25rem; }
.mt-2 { margin-top: 0.5rem; }
.mt-6 { margin-top: 1.5rem; }
.mt-8 { margin-top: 2rem; }
.mb-1 { margin-bottom: 0.25rem; }
.mb-2 { margin-bottom: 0.5rem; }
.mb-3 { margin-bottom: 0.75rem; }
.mb-4 { margin-bottom: 1rem; }
.mb-6 { margin-bottom: 1.5rem; }
.mb-8 { margin-bottom: 2rem; }
.mb-12 { margin-bottom: 3rem; }
.ml-2 { margin-left: 0.5rem; }
.mr-2 { margin-right: 0.5rem; }

/* === Typography === */
.text-xs { font-size: 0.75rem; line-height: 1rem; }
.text-sm { font-size: 0.875rem; line-height: 1.25rem; }
.text-base { font-size: 1rem; line-height: 1.5rem; }
.text-lg { font-size: 1.125rem; line-height: 1.75rem; }
.text-xl { font-size: 1.25rem; line-height: 1.75rem; }
.text-2xl { font-size: 1.5rem; line-height: 2rem; }
.text-3xl { font-size: 1.875rem; line-height: 2.25rem; }
.text-4xl { font-size: 2.25rem; line-height: 2.5rem; }
.text-5xl { font-size: 3rem; line-height: 1.1; }
.text-6xl { font-size: 3.75rem; line-height: 1; }
.font-medium { font-weight: 500; }
.font-semibold { font-weight: 600; }
.font-bold { font-weight: 700; }
.font-mono { font-family: var(--font-mono); }
.leading-none { line-height: 1; }
.leading-tight { line-height: 1.25; }
.leading-relaxed { line-height: 1.625; }
.tracking-tight { letter-spacing: -0.025em; }
.text-left { text-align: left; }
.text-center { text-align: center; }
.text-right { text-align: right; }
.whitespace-nowrap { white-space: nowrap; }
.underline { text-decoration: underline; }
.underline-offset-4 { text-underline-offset: 4px; }
.line-clamp-2 {
  display: -webkit-box;
  -webkit-line-clamp: 2;
  -webkit-box-orient: vertical;
  overflow: hidden;
}

/* === Colors === */
.text-white { color: #fff; }
.text-neutral-50 { color: var(--neutral-50); }
.text-neutral-300 { color: var(--neutral-300); }
.text-neutral-400 { color: var(--neutral-400); }
.text-neutral-500 { color: var(--neutral-500); }
.text-neutral-600 { color: var(--neutral-600); }
.text-neutral-700 { color: var(--neutral-700); }
.text-neutral-900 { color: var(--neutral-900); }
.text-neutral-950 { color: var(--neutral-950); }
.text-primary-600 { color: var(--primary-600); }
.text-primary-700 { color: var(--primary-700); }
.text-secondary-600 { color: var(--secondary-600); }
.text-success-500 { color: var(--success-500); }
.text-success-600 { color: var(--success-600); }
.text-warning-500 { color: var(--warning-500); }
.text-warning-700 { color: var(--warning-700); }
.text-warning-800 { color: var(--warning-800); }
.text-error-500 { color: var(--error-500); }

.bg-white { background-color: #fff; }
.bg-white\/70 { background-color: rgba(255, 255, 255, 0.7); }
.bg-transparent { background-color: transparent; }
.bg-neutral-50 { background-color: var(--neutral-50); }
.bg-neutral-100 { background-color: var(--neutral-100); }
.bg-neutral-200 { background-color: var(--neutral-200); }
.bg-neutral-900 { background-color: var(--neutral-900); }
.bg-primary-100 { background-color: var(--primary-100); }
.bg-primary-600 { background-color: var(--primary-600); }
.bg-primary-700 { background-color: var(--primary-700); }
.bg-primary-800 { background-color: var(--primary-800); }
.bg-secondary-600 { background-color: var(--secondary-600); }
.bg-success-100 { background-color: var(--success-100); }
.bg-success-500 { background-color: var(--success-500); }
.bg-warning-50 { background-color: var(--warning-50); }
.bg-warning-500 { background-color: var(--warning-500); }
.bg-error-500 { background-color: var(--error-500); }
.bg-info-500 { background-color: var(--info-500); }

/* === Borders and Effects === */
.border { border-width: 1px; }
.border-t { border-top-width: 1px; }
.border-b { border-bottom-width: 1px; }
.border-neutral-100 { border-color: var(--neutral-100); }
.border-neutral-200 { border-color: var(--neutral-200); }
.border-neutral-300 { border-color: var(--neutral-300); }
.border-primary-600 { border-color: var(--primary-600); }
.border-primary-700 { border-color: var(--primary-700); }
.border-success-500 { border-color: var(--success-500); }
.border-warning-200 { border-color: var(--warning-200); }
.border-error-500 { border-color: var(--error-500); }
.rounded { border-radius: 0.25rem; }
.rounded-md { border-radius: 0.375rem; }
.rounded-lg { border-radius: 0.5rem; }
.rounded-3xl { border-radius: 1.5rem; }
.rounded-full { border-radius: 9999px; }
.rounded-none { border-radius: 0; }
.shadow-sm { box-shadow: var(--shadow-sm); }
.shadow-medium { box-shadow: var(--shadow-medium); }
.shadow-none { box-shadow: none; }
.opacity-50 { opacity: 0.5; }
.pointer-events-none { pointer-events: none; }
.cursor-pointer { cursor: pointer; }
.ring-offset-white { --ring-offset-color: #fff; }
.ring-2 { box-shadow: 0 0 0 2px var(--ring-color, #fff); }
.ring-white { --ring-color: #fff; }
.transition-colors {
  transition: color var(--transition-fast), background-color var(--transition-fast),
    border-color var(--transition-fast);
}
.transition-shadow { transition: box-shadow var(--transition-normal); }

/* === State Variants === */
.hover\:bg-neutral-50:hover { background-color: var(--neutral-50); }
.hover\:bg-neutral-100:hover { background-color: var(--neutral-100); }
.hover\:bg-neutral-100\/80:hover { background-color: rgba(245, 245, 245, 0.8); }
.hover\:bg-neutral-900\/80:hover { background-color: rgba(23, 23, 23, 0.8); }
.hover\:bg-primary-700:hover { background-color: var(--primary-700); }
.hover\:bg-secondary-700:hover { background-color: var(--secondary-700); }
.hover\:bg-success-600:hover { background-color: var(--success-600); }
.hover\:bg-warning-600:hover { background-color: var(--warning-600); }
.hover\:bg-error-600:hover { background-color: var(--error-600); }
.hover\:bg-info-600:hover { background-color: var(--info-600); }
.hover\:text-neutral-900:hover { color: var(--neutral-900); }
.hover\:underline:hover { text-decoration: underline; }
.hover\:shadow-medium:hover { box-shadow: var(--shadow-medium); }
.active\:bg-primary-800:active { background-color: var(--primary-800); }
.active\:bg-secondary-800:active { background-color: var(--secondary-800); }
.active\:bg-error-700:active { background-color: var(--error-700); }

.focus\:outline-none:focus,
.focus-visible\:outline-none:focus-visible { outline: none; }
.focus\:ring-2:focus,
.focus-visible\:ring-2:focus-visible {
  box-shadow: 0 0 0 2px var(--ring-offset-color, #fff), 0 0 0 4px var(--ring-color, var(--neutral-950));
}
.focus\:ring-neutral-950,
.focus-visible\:ring-neutral-950 { --ring-color: var(--neutral-950); }
.focus-visible\:ring-primary-500 { --ring-color: var(--primary-500); }
.focus-visible\:ring-error-500 { --ring-color: var(--error-500); }
.focus-visible\:ring-success-500 { --ring-color: var(--success-500); }
.focus\:ring-offset-2,
.focus-visible\:ring-offset-2 { --ring-offset-color: #fff; }

.placeholder\:text-neutral-500::placeholder { color: var(--neutral-500); }
.disabled\:pointer-events-none:disabled { pointer-events: none; }
.disabled\:opacity-50:disabled { opacity: 0.5; }
.disabled\:cursor-not-allowed:disabled { cursor: not-allowed; }

/* === Animation === */
@keyframes spin {
  to { transform: rotate(360deg); }
}
@keyframes pulse {
  50% { opacity: 0.5; }
}
.animate-spin { animation: spin 1s linear infinite; }
.animate-pulse { animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite; }
.spinner {
  display: inline-block;
  border: 2px solid currentColor;
  border-right-color: transparent;
  border-radius: 9999px;
}

/* === Header and Footer === */
.site-header { backdrop-filter: blur(8px); }
.logo { display: inline-flex; align-items: center; gap: 0.5rem; }
.logo-mark {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2rem;
  height: 2rem;
  border-radius: 0.5rem;
  background: var(--primary-600);
  color: #fff;
  font-weight: 700;
}
.logo-text { font-size: 1.25rem; font-weight: 700; color: var(--neutral-900); }
.logo-inverted .logo-text { color: #fff; }
.logo-inverted .logo-mark { background: #fff; color: var(--primary-700); }
.nav-link {
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--neutral-600);
  transition: color var(--transition-fast);
}
.nav-link:hover, .nav-link.active { color: var(--primary-600); }
.footer-link { color: var(--neutral-400); transition: color var(--transition-fast); }
.footer-link:hover { color: #fff; }
.text-link { color: var(--primary-600); font-weight: 500; }
.text-link:hover { text-decoration: underline; }
.mobile-only { display: none; }
.divider { height: 1px; width: 100%; background: var(--neutral-200); }

@media (max-width: 768px) {
  .desktop-only { display: none; }
  .mobile-only { display: block; }
  .grid-cols-3, .grid-cols-4 { grid-template-columns: repeat(2, minmax(0, 1fr)); }
  .checkout-grid, .settings-grid, .detail-grid { grid-template-columns: 1fr; }
}

/* === Home === */
.hero {
  padding: 6rem 0;
  background: linear-gradient(120deg, var(--primary-800), var(--primary-600) 60%, var(--secondary-600));
}
.hero-content { display: flex; align-items: center; }
.skill-chip {
  padding: 0.75rem;
  border-radius: 0.5rem;
  background: rgba(255, 255, 255, 0.12);
}
.cta-outline { background: transparent; border-color: #fff; color: #fff; }
.cta-outline:hover { background: #fff; color: var(--primary-700); }
.icon-disc {
  display: flex;
  flex-shrink: 0;
  align-items: center;
  justify-content: center;
  width: 3.5rem;
  height: 3.5rem;
  border-radius: 9999px;
  font-size: 1.5rem;
}

/* === Forms === */
.input-icon-left, .input-icon-right {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  display: inline-flex;
  align-items: center;
}
.input-icon-left { left: 0.75rem; }
.input-icon-right { right: 0.75rem; }
.otp-input { text-align: center; letter-spacing: 0.75em; font-family: var(--font-mono); }
.select {
  width: 100%;
  height: 2.5rem;
  padding: 0 0.75rem;
  border: 1px solid var(--neutral-300);
  border-radius: 0.375rem;
  background: #fff;
  font-size: 0.875rem;
}
.select-error { border-color: var(--error-500); }
.checkbox { width: 1rem; height: 1rem; accent-color: var(--primary-600); }
.banner {
  padding: 0.75rem 1rem;
  border-radius: 0.375rem;
  border: 1px solid;
  font-size: 0.875rem;
}
.banner-success { background: var(--success-100); border-color: var(--success-500); color: var(--success-600); }
.banner-error { background: #fef2f2; border-color: var(--error-500); color: var(--error-600); }
.auth-shell {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  padding: 2rem 1rem;
  background: linear-gradient(180deg, var(--primary-50), var(--neutral-50));
}

/* === Courses === */
.breadcrumb { display: flex; gap: 0.5rem; font-size: 0.875rem; color: var(--neutral-500); }
.detail-hero { padding: 3rem 0; background: var(--primary-800); color: #fff; }
.detail-image { width: 100%; height: 16rem; object-fit: cover; border-radius: 0.5rem; }
.detail-grid { display: grid; grid-template-columns: 2fr 1fr; gap: 2rem; }
.tech-chip {
  display: inline-flex;
  padding: 0.25rem 0.75rem;
  border-radius: 9999px;
  background: var(--primary-50);
  color: var(--primary-700);
  font-size: 0.875rem;
}
.checkout-grid { display: grid; grid-template-columns: 3fr 2fr; gap: 2rem; }
.checkout-form { display: flex; flex-direction: column; gap: 1rem; }
.checkout-summary { position: sticky; top: 6rem; align-self: start; }
.not-found {
  min-height: 60vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1rem;
  text-align: center;
}
.empty-state { padding: 3rem 1rem; text-align: center; color: var(--neutral-500); }

/* === Account === */
.account-tab {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.75rem 0.25rem;
  border-bottom: 2px solid transparent;
  color: var(--neutral-500);
  font-size: 0.875rem;
  font-weight: 500;
}
.account-tab:hover { color: var(--neutral-900); }
.account-tab.active { color: var(--primary-600); border-bottom-color: var(--primary-600); }
.user-menu-button { display: inline-flex; align-items: center; gap: 0.5rem; border-radius: 9999px; }
.dropdown {
  position: absolute;
  right: 0;
  top: calc(100% + 0.5rem);
  min-width: 12rem;
  padding: 0.25rem;
  border: 1px solid var(--neutral-200);
  border-radius: 0.5rem;
  background: #fff;
  box-shadow: var(--shadow-medium);
  z-index: 50;
}
.dropdown-item {
  display: block;
  width: 100%;
  padding: 0.5rem 0.75rem;
  border-radius: 0.375rem;
  text-align: left;
  font-size: 0.875rem;
}
.dropdown-item:hover { background: var(--neutral-100); }
.progress-track { width: 100%; height: 0.5rem; border-radius: 9999px; background: var(--neutral-200); overflow: hidden; }
.progress-fill { height: 100%; border-radius: 9999px; background: var(--primary-600); transition: width var(--transition-normal); }
.settings-grid { display: grid; grid-template-columns: 1fr 2fr; gap: 2rem; }
.settings-side { display: flex; flex-direction: column; align-items: center; gap: 1rem; }
.settings-main { display: flex; flex-direction: column; gap: 1.5rem; }
.confirm-panel {
  padding: 1rem;
  border: 1px solid var(--warning-200);
  border-radius: 0.5rem;
  background: var(--warning-50);
}
.invoice-table th, .invoice-table td { padding: 0.75rem 1rem; text-align: left; border-bottom: 1px solid var(--neutral-200); }
.invoice-table th { font-size: 0.75rem; text-transform: uppercase; color: var(--neutral-500); }
"#;
