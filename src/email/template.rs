pub const VERIFICATION_SUBJECT: &str = "Xác thực tài khoản Coffee Stay";

const VERIFY_EMAIL_PATH: &str = "/api/auth/verify-email";

/// Joins the base URL and token as-is; neither is trimmed nor percent-encoded.
pub fn build_verification_url(base_url: &str, token: &str) -> String {
  format!("{}{}?token={}", base_url, VERIFY_EMAIL_PATH, token)
}

pub fn render_verification_html(verification_url: &str) -> String {
  format!(
    r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 24px; color: #3e2723;">
  <h2 style="color: #6d4c41;">Chào mừng bạn đến với Coffee Stay!</h2>
  <p>Cảm ơn bạn đã đăng ký tài khoản. Vui lòng nhấn vào nút bên dưới để xác thực địa chỉ email của bạn:</p>
  <p style="text-align: center; margin: 32px 0;">
    <a href="{url}" style="background-color: #6d4c41; color: #ffffff; padding: 12px 24px; text-decoration: none; border-radius: 4px; display: inline-block;">Xác thực tài khoản</a>
  </p>
  <p>Nếu nút không hoạt động, hãy sao chép và dán liên kết sau vào trình duyệt:</p>
  <p style="word-break: break-all;">{url}</p>
  <p>Liên kết này sẽ hết hạn sau 24 giờ.</p>
  <p>Nếu bạn không đăng ký tài khoản Coffee Stay, vui lòng bỏ qua email này.</p>
</div>"#,
    url = verification_url
  )
}
